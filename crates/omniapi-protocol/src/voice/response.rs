use omniapi_model::{ApiEnum, api_model};

use crate::voice::types::{AudioFormat, Voice};

api_model! {
    pub struct SpeechResult builder SpeechResultBuilder {
        /// Base64-encoded audio.
        required audio: String => "audio",
        required format: ApiEnum<AudioFormat> => "format",
        optional duration_ms: i64 => "duration_ms",
        optional characters: i64 => "characters",
    }
}

api_model! {
    pub struct VoiceList builder VoiceListBuilder {
        required data: Vec<Voice> => "data",
    }
}

pub type SynthesizeSpeechResponse = SpeechResult;
pub type ListVoicesResponse = VoiceList;
