pub mod request;
pub mod response;
pub mod types;

pub use request::{
    ListVoicesParams, ListVoicesParamsBuilder, SynthesizeSpeechParams,
    SynthesizeSpeechParamsBuilder,
};
pub use response::{
    ListVoicesResponse, SpeechResult, SpeechResultBuilder, SynthesizeSpeechResponse, VoiceList,
    VoiceListBuilder,
};
pub use types::{AudioFormat, Voice, VoiceBuilder, VoiceGender};
