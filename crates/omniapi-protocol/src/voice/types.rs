use omniapi_model::{ApiEnum, api_model, wire_enum};

wire_enum! {
    pub enum AudioFormat {
        Mp3 => "mp3",
        Wav => "wav",
        Ogg => "ogg",
        Pcm => "pcm",
    }
}

wire_enum! {
    pub enum VoiceGender {
        Female => "female",
        Male => "male",
        Neutral => "neutral",
    }
}

api_model! {
    pub struct Voice builder VoiceBuilder {
        required id: String => "id",
        required name: String => "name",
        /// BCP 47 tag, e.g. `en-GB`.
        required language: String => "language",
        optional gender: ApiEnum<VoiceGender> => "gender",
        optional preview_url: String => "preview_url",
    }
}
