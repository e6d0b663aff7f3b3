use std::borrow::Cow;

use conform_core::model::{Model, OpenAiModel};

pub const GPT4_O_MINI: &str = "gpt-4o-mini";
pub const GPT4_O: &str = "gpt-4o";
pub const O4_MINI: &str = "o4-mini";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    if let Model::Custom(custom) = model {
        return Some(Cow::Borrowed(*custom));
    }

    let Model::OpenAi(openai_model) = model else {
        return None;
    };

    match openai_model {
        OpenAiModel::Gpt4o => Some(GPT4_O.into()),
        OpenAiModel::Gpt4oMini => Some(GPT4_O_MINI.into()),
        OpenAiModel::O4Mini => Some(O4_MINI.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_builtin_models_to_wire_names() {
        assert_eq!(
            map_model(&Model::OpenAi(OpenAiModel::Gpt4oMini)).unwrap(),
            GPT4_O_MINI
        );
        assert_eq!(map_model(&Model::OpenAi(OpenAiModel::Gpt4o)).unwrap(), GPT4_O);
    }

    #[test]
    fn custom_model_names_pass_through() {
        assert_eq!(
            map_model(&Model::Custom("my-finetune")).unwrap(),
            "my-finetune"
        );
    }
}
