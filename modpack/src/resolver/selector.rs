//! Choice selection strategies.
//!
//! The resolver asks a [`ChoiceSelector`] for exactly one choice per visited
//! configuration. Selectors may block on user interaction; the resolver puts
//! no timeout on them and propagates any [`SelectorError`].

use std::collections::HashMap;

use super::error::SelectorError;
use crate::descriptor::{Choice, Configuration, SelectionType};

/// What a selector is asked to decide.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceRequest<'a> {
    /// The configuration being visited.
    pub configuration: &'a Configuration,
    /// How the mod wants choices presented.
    pub selection_type: SelectionType,
    /// Zero-based position of this configuration in the resolution path.
    pub step: usize,
}

impl<'a> ChoiceRequest<'a> {
    pub fn choices(&self) -> &'a [Choice] {
        &self.configuration.choices
    }

    pub fn name(&self) -> &'a str {
        &self.configuration.name
    }

    /// Index of the choice called `name`.
    pub fn position(&self, name: &str) -> Result<usize, SelectorError> {
        self.choices()
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| SelectorError::UnknownChoice {
                configuration: self.name().to_string(),
                choice: name.to_string(),
            })
    }
}

/// Supplies one choice (by index) for each visited configuration.
pub trait ChoiceSelector {
    fn select(&mut self, request: ChoiceRequest<'_>) -> Result<usize, SelectorError>;
}

impl<F> ChoiceSelector for F
where
    F: FnMut(ChoiceRequest<'_>) -> Result<usize, SelectorError>,
{
    fn select(&mut self, request: ChoiceRequest<'_>) -> Result<usize, SelectorError> {
        self(request)
    }
}

/// Always picks the first choice. The deterministic `Auto` selector.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstChoice;

impl ChoiceSelector for FirstChoice {
    fn select(&mut self, request: ChoiceRequest<'_>) -> Result<usize, SelectorError> {
        if request.choices().is_empty() {
            return Err(SelectorError::NoAnswer(request.name().to_string()));
        }
        Ok(0)
    }
}

/// Answers from a prepared configuration-name → choice-name table.
///
/// Configurations missing from the table fall back to `fallback` when one is
/// set, otherwise selection fails with [`SelectorError::NoAnswer`].
///
/// ```
/// use modpack::resolver::{FirstChoice, ScriptedSelector};
///
/// let selector = ScriptedSelector::new()
///     .answer("Font", "Serif")
///     .answer("Size", "Large")
///     .with_fallback(FirstChoice);
/// assert_eq!(selector.len(), 2);
/// ```
#[derive(Default)]
pub struct ScriptedSelector {
    answers: HashMap<String, String>,
    fallback: Option<Box<dyn ChoiceSelector>>,
}

impl ScriptedSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the choice to make for `configuration`.
    pub fn answer(mut self, configuration: impl Into<String>, choice: impl Into<String>) -> Self {
        self.answers.insert(configuration.into(), choice.into());
        self
    }

    pub fn with_fallback(mut self, fallback: impl ChoiceSelector + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Parse `CONFIG=CHOICE` pairs.
    pub fn from_pairs<'s>(
        pairs: impl IntoIterator<Item = &'s str>,
    ) -> Result<Self, SelectorError> {
        pairs.into_iter().try_fold(Self::new(), |selector, pair| {
            let (config, choice) = pair
                .split_once('=')
                .map(|(c, ch)| (c.trim(), ch.trim()))
                .filter(|(c, ch)| !c.is_empty() && !ch.is_empty())
                .ok_or_else(|| {
                    SelectorError::Failed(format!("expected CONFIG=CHOICE, got '{}'", pair))
                })?;
            Ok(selector.answer(config, choice))
        })
    }
}

impl std::fmt::Debug for ScriptedSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedSelector")
            .field("answers", &self.answers)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl ChoiceSelector for ScriptedSelector {
    fn select(&mut self, request: ChoiceRequest<'_>) -> Result<usize, SelectorError> {
        match self.answers.get(request.name()) {
            Some(choice) => request.position(choice),
            None => match self.fallback.as_mut() {
                Some(fallback) => fallback.select(request),
                None => Err(SelectorError::NoAnswer(request.name().to_string())),
            },
        }
    }
}
