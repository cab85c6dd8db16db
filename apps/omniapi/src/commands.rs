use anyhow::Context;
use omniapi_client::OmniClient;
use omniapi_model::{ApiEnum, ApiModel, Validate, Variant};
use omniapi_protocol::{agents, documents, formatting, llm, ocr, payments, vault, voice};
use serde_json::Value;

use crate::cli::{
    AgentsCommand, Command, DocumentsCommand, LlmCommand, OcrCommand, PaymentsCommand,
    VaultCommand, VoiceCommand,
};

pub(crate) async fn run(
    client: &OmniClient,
    command: Command,
    validate: bool,
) -> anyhow::Result<Value> {
    match command {
        Command::Documents(command) => run_documents(client, command, validate).await,
        Command::Ocr(OcrCommand::Extract {
            url,
            languages,
            text_only,
            layout,
        }) => {
            let params = ocr::ExtractTextParams::builder()
                .document(Variant::new(url))
                .languages((!languages.is_empty()).then_some(languages))
                .text_only(text_only.then_some(true))
                .detect_layout(layout.then_some(true))
                .build()?;
            let params = checked(params, validate)?;
            finish(client.ocr().extract(&params).await?, validate)
        }
        Command::Format {
            file,
            language,
            indent,
            line_width,
        } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let options = if indent.is_some() || line_width.is_some() {
                Some(
                    formatting::FormatOptions::builder()
                        .indent(indent.as_deref().map(parse_indent))
                        .line_width(line_width)
                        .build()?,
                )
            } else {
                None
            };
            let params = formatting::FormatParams::builder()
                .content(content)
                .language(ApiEnum::<formatting::SourceLanguage>::from_raw(language))
                .options(options)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.formatting().format(&params).await?, validate)
        }
        Command::Payments(command) => run_payments(client, command, validate).await,
        Command::Voice(command) => run_voice(client, command, validate).await,
        Command::Agents(AgentsCommand::Run {
            agent_id,
            input,
            tools,
            max_steps,
            no_wait,
        }) => {
            let params = agents::RunAgentParams::builder()
                .agent_id(agent_id)
                .input(parse_agent_input(&input))
                .tools((!tools.is_empty()).then_some(tools))
                .max_steps(max_steps)
                .async_run(no_wait.then_some(true))
                .build()?;
            let params = checked(params, validate)?;
            finish(client.agents().run(&params).await?, validate)
        }
        Command::Vault(command) => run_vault(client, command, validate).await,
        Command::Llm(LlmCommand::Complete {
            model,
            prompt,
            system,
            max_tokens,
            temperature,
            provider,
        }) => {
            let mut messages = Vec::new();
            if let Some(system) = system {
                messages.push(llm::Message::text(llm::Role::System, system)?);
            }
            messages.push(llm::Message::text(llm::Role::User, prompt)?);
            let params = llm::CompleteParams::builder()
                .model(model)
                .messages(messages)
                .max_tokens(max_tokens)
                .temperature(temperature)
                .provider(provider)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.llm().complete(&params).await?, validate)
        }
    }
}

async fn run_documents(
    client: &OmniClient,
    command: DocumentsCommand,
    validate: bool,
) -> anyhow::Result<Value> {
    match command {
        DocumentsCommand::Convert {
            url,
            to,
            from,
            pages,
            idempotency_key,
        } => {
            let params = documents::ConvertDocumentParams::builder()
                .source(Variant::new(url))
                .target_format(ApiEnum::<documents::DocumentFormat>::from_raw(to))
                .source_format(from.map(ApiEnum::<documents::DocumentFormat>::from_raw))
                .page_range(pages)
                .idempotency_key(idempotency_key)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.documents().convert(&params).await?, validate)
        }
        DocumentsCommand::Get { conversion_id } => {
            let params = documents::GetConversionParams::builder()
                .conversion_id(conversion_id)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.documents().get_conversion(&params).await?, validate)
        }
    }
}

async fn run_payments(
    client: &OmniClient,
    command: PaymentsCommand,
    validate: bool,
) -> anyhow::Result<Value> {
    match command {
        PaymentsCommand::Create {
            amount,
            currency,
            token,
            description,
            idempotency_key,
        } => {
            let params = payments::CreatePaymentParams::builder()
                .amount(amount)
                .currency(ApiEnum::<payments::Currency>::from_raw(currency))
                .payment_method(Variant::new(token))
                .description(description)
                .idempotency_key(idempotency_key)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.payments().create(&params).await?, validate)
        }
        PaymentsCommand::Get { payment_id, expand } => {
            let params = payments::GetPaymentParams::builder()
                .payment_id(payment_id)
                .expand((!expand.is_empty()).then_some(expand))
                .build()?;
            let params = checked(params, validate)?;
            finish(client.payments().retrieve(&params).await?, validate)
        }
    }
}

async fn run_voice(
    client: &OmniClient,
    command: VoiceCommand,
    validate: bool,
) -> anyhow::Result<Value> {
    match command {
        VoiceCommand::Synthesize {
            voice,
            text,
            format,
            speed,
        } => {
            let params = voice::SynthesizeSpeechParams::builder()
                .text(text)
                .voice_id(voice)
                .format(format.map(ApiEnum::<voice::AudioFormat>::from_raw))
                .speed(speed)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.voice().synthesize(&params).await?, validate)
        }
        VoiceCommand::List { language, gender } => {
            let params = voice::ListVoicesParams::builder()
                .language(language)
                .gender(gender.map(ApiEnum::<voice::VoiceGender>::from_raw))
                .build()?;
            let params = checked(params, validate)?;
            finish(client.voice().list_voices(&params).await?, validate)
        }
    }
}

async fn run_vault(
    client: &OmniClient,
    command: VaultCommand,
    validate: bool,
) -> anyhow::Result<Value> {
    match command {
        VaultCommand::Put {
            name,
            value,
            json,
            ttl,
        } => {
            let value = if json {
                let document: Value =
                    serde_json::from_str(&value).context("secret value is not valid JSON")?;
                Variant::new(document)
            } else {
                Variant::new(value)
            };
            let params = vault::PutSecretParams::builder()
                .name(name)
                .value(value)
                .ttl(ttl)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.vault().put_secret(&params).await?, validate)
        }
        VaultCommand::Get { name, version } => {
            let params = vault::GetSecretParams::builder()
                .name(name)
                .version(version)
                .build()?;
            let params = checked(params, validate)?;
            finish(client.vault().get_secret(&params).await?, validate)
        }
        VaultCommand::Delete { name } => {
            let params = vault::DeleteSecretParams::builder().name(name).build()?;
            let params = checked(params, validate)?;
            finish(client.vault().delete_secret(&params).await?, validate)
        }
    }
}

fn checked<P: Validate>(params: P, validate: bool) -> anyhow::Result<P> {
    if validate {
        params.validate().context("request params failed validation")?;
    }
    Ok(params)
}

fn finish<M: ApiModel + Validate>(model: M, validate: bool) -> anyhow::Result<Value> {
    if validate {
        model.validate().context("response failed validation")?;
    }
    Ok(model.to_wire_value())
}

fn parse_indent(raw: &str) -> Variant<formatting::IndentStyle> {
    match raw.trim().parse::<i64>() {
        Ok(spaces) => Variant::new(spaces),
        Err(_) => Variant::new(ApiEnum::<formatting::IndentToken>::from_raw(
            raw.trim().to_string(),
        )),
    }
}

fn parse_agent_input(raw: &str) -> Variant<agents::AgentInput> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() || value.is_array() => Variant::new(value),
        _ => Variant::new(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omniapi_protocol::agents::AgentInput;
    use omniapi_common::ClientConfig;
    use omniapi_protocol::formatting::{IndentStyle, IndentToken};
    use serde_json::json;

    use crate::cli::PaymentsCommand;

    fn payment_with_currency(currency: &str) -> payments::CreatePaymentParams {
        payments::CreatePaymentParams::builder()
            .amount(100_i64)
            .currency(ApiEnum::<payments::Currency>::from_raw(currency.to_string()))
            .payment_method(Variant::new("tok_visa".to_string()))
            .build()
            .expect("build params")
    }

    #[test]
    fn agent_input_detects_json_documents() {
        let input = parse_agent_input(r#"{"ticket": 42}"#);
        assert!(input.try_pick(AgentInput::as_structured).is_some());

        let input = parse_agent_input("42");
        assert_eq!(
            input.try_pick(AgentInput::as_text).map(String::as_str),
            Some("42")
        );
    }

    #[test]
    fn indent_accepts_numbers_and_tokens() {
        assert_eq!(parse_indent("4").try_pick(IndentStyle::as_spaces), Some(&4));
        let tab = parse_indent("tab");
        let token = tab.try_pick(IndentStyle::as_token).expect("token");
        assert_eq!(*token, IndentToken::Tab);
    }

    #[test]
    fn checked_only_rejects_when_asked() {
        let params = payment_with_currency("xyz");
        assert!(checked(params.clone(), false).is_ok());

        let err = checked(params, true).unwrap_err();
        assert_eq!(err.to_string(), "request params failed validation");
        assert!(format!("{err:#}").contains("not a known Currency value"));

        assert!(checked(payment_with_currency("usd"), true).is_ok());
    }

    #[test]
    fn finish_emits_wire_json_and_validates_on_request() {
        let wire = json!({
            "id": "pay_1",
            "amount": 100,
            "currency": "usd",
            "status": "disputed",
            "created_at": "2025-03-08T10:15:30Z"
        });
        let payment: payments::Payment = serde_json::from_value(wire.clone()).expect("parse");

        assert_eq!(finish(payment.clone(), false).expect("finish"), wire);
        let err = finish(payment, true).unwrap_err();
        assert_eq!(err.to_string(), "response failed validation");
    }

    #[tokio::test]
    async fn invalid_params_stop_before_sending() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 1,
            ..ClientConfig::default()
        };
        let client = OmniClient::new(config).expect("client");
        let command = Command::Payments(PaymentsCommand::Create {
            amount: 100,
            currency: "xyz".to_string(),
            token: "tok_visa".to_string(),
            description: None,
            idempotency_key: None,
        });

        let err = run(&client, command, true).await.unwrap_err();
        assert_eq!(err.to_string(), "request params failed validation");
    }
}
