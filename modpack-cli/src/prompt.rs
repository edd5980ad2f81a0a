//! Interactive choice selection.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use modpack::descriptor::{Choice, SelectionType};
use modpack::resolver::{ChoiceRequest, ChoiceSelector, FirstChoice, SelectorError};

/// Prompts on the terminal for each configuration.
///
/// `Auto` descriptors are never prompted; the first choice is taken.
pub struct PromptSelector {
    theme: ColorfulTheme,
}

impl PromptSelector {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for PromptSelector {
    fn default() -> Self {
        Self::new()
    }
}

fn item_label(choice: &Choice) -> String {
    if choice.description.is_empty() {
        choice.name.clone()
    } else {
        format!("{} - {}", choice.name, choice.description)
    }
}

fn prompt_label(request: &ChoiceRequest<'_>) -> String {
    let description = &request.configuration.description;
    if description.is_empty() {
        request.name().to_string()
    } else {
        format!("{}: {}", request.name(), description)
    }
}

impl ChoiceSelector for PromptSelector {
    fn select(&mut self, request: ChoiceRequest<'_>) -> Result<usize, SelectorError> {
        if request.selection_type == SelectionType::Auto {
            return FirstChoice.select(request);
        }

        let items: Vec<String> = request.choices().iter().map(item_label).collect();
        Select::with_theme(&self.theme)
            .with_prompt(prompt_label(&request))
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|e| SelectorError::Failed(e.to_string()))?
            .ok_or(SelectorError::Cancelled)
    }
}
