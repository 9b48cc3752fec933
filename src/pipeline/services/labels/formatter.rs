/// Turns raw predictor labels such as `"tabby, tabby cat"` into display names.
pub fn format_label(label: &str) -> String {
    let label = label.replace('_', " ");
    let primary = label.split(',').next().unwrap_or_default();
    title_case(primary)
}

// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alphabetic = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(c);
            previous_alphabetic = false;
        }
    }

    out
}
