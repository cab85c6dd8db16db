//! One borrowed facade per service, e.g. `client.payments().create(&params)`.

mod agents;
mod documents;
mod formatting;
mod llm;
mod ocr;
mod payments;
mod vault;
mod voice;

pub use agents::AgentsService;
pub use documents::DocumentsService;
pub use formatting::FormattingService;
pub use llm::LlmService;
pub use ocr::OcrService;
pub use payments::PaymentsService;
pub use vault::VaultService;
pub use voice::VoiceService;
