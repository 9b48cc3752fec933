mod handlers;
mod router;
mod server;
mod state;

pub use handlers::ClassifyBody;
pub use router::create_router;
pub use server::Server;
pub use state::AppState;
