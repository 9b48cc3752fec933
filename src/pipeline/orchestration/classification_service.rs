use std::pin::Pin;
use std::sync::Arc;

use futures::task::{Context, Poll};
use futures::Future;
use tower::Service;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::result_assembler::ResultAssembler;
use crate::error::AppError;
use crate::pipeline::domain::{ClassificationResult, ImagePayload};

/// One classification request as it enters the pipeline.
#[derive(Debug, Clone)]
pub struct ClassifyRequest {
    pub id: Uuid,
    pub payload: ImagePayload,
}

impl ClassifyRequest {
    pub fn new(payload: ImagePayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
        }
    }
}

/// Decodes the payload and hands the image to the assembler.
#[derive(Clone)]
pub struct ClassificationService {
    assembler: Arc<ResultAssembler>,
}

impl ClassificationService {
    pub fn new(assembler: Arc<ResultAssembler>) -> Self {
        Self { assembler }
    }
}

impl Service<ClassifyRequest> for ClassificationService {
    type Response = ClassificationResult;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ClassifyRequest) -> Self::Future {
        let assembler = self.assembler.clone();
        let span = info_span!("classify", request_id = %req.id);

        Box::pin(
            async move {
                let payload = req.payload;
                let image = tokio::task::spawn_blocking(move || payload.decode()).await??;
                info!("Decoded {}x{} image", image.width(), image.height());

                let result = assembler.assemble(image).await?;
                info!(
                    "Classified as {} [{}] via {:?}",
                    result.name, result.category, result.source
                );
                Ok(result)
            }
            .instrument(span),
        )
    }
}
