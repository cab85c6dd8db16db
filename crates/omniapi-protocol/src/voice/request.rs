use omniapi_model::{ApiEnum, api_params};

use crate::voice::types::{AudioFormat, VoiceGender};

api_params! {
    pub struct SynthesizeSpeechParams builder SynthesizeSpeechParamsBuilder {
        endpoint: "voice.synthesize",
        method: Post,
        path: "/v1/voice/synthesize",
        path_params {}
        headers {}
        query {}
        body {
            required text: String => "text",
            required voice_id: String => "voice_id",
            optional format: ApiEnum<AudioFormat> => "format",
            /// 0.25 to 4.0, server default 1.0.
            optional speed: f64 => "speed",
            optional sample_rate: i64 => "sample_rate",
        }
    }
}

api_params! {
    pub struct ListVoicesParams builder ListVoicesParamsBuilder {
        endpoint: "voice.list_voices",
        method: Get,
        path: "/v1/voice/voices",
        path_params {}
        headers {}
        query {
            optional language: String => "language",
            optional gender: ApiEnum<VoiceGender> => "gender",
        }
        body {}
    }
}
