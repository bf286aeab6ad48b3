//! Preparation techniques attached to recipe ingredients.

use serde::{Deserialize, Serialize};

/// How an application-technique ingredient reaches the finished drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationMethod {
    /// Layered on the surface of the drink.
    Float,
    /// Coats the inside of the glass and is discarded.
    Rinse,
    /// Poured on top to finish the build.
    Top,
}

impl ApplicationMethod {
    /// Display label for recipe rendering.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationMethod::Float => "float",
            ApplicationMethod::Rinse => "rinse",
            ApplicationMethod::Top => "top",
        }
    }
}

/// Temperature the ingredient is prepared or held at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureState {
    Chilled,
    Hot,
    Frozen,
}

impl TemperatureState {
    /// Display label for recipe rendering.
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureState::Chilled => "chilled",
            TemperatureState::Hot => "hot",
            TemperatureState::Frozen => "frozen",
        }
    }
}

/// A preparation applied to an ingredient before or during the build.
///
/// The set is closed: recipes only ever use these kinds, and adding one is
/// a deliberate schema change rather than a free-form string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Technique {
    /// Steeped with another ingredient ("jalapeño-infused tequila").
    Infusion { ingredient: String },
    /// Washed with a fat that is later frozen off.
    FatWash { fat: String },
    /// Clarified through curdled milk.
    MilkWash,
    /// Clarified by filtration or centrifuge.
    Clarification,
    /// Held at a temperature before use.
    Temperature { state: TemperatureState },
    /// Pressed in the glass to release oils or juice.
    Muddled,
    /// Cut to order, as for garnish fruit.
    Cut,
    /// Age or ripeness called for ("overripe", "green").
    Maturity { state: String },
    /// Applied to the finished drink rather than mixed in.
    Application { method: ApplicationMethod },
    /// Acid-adjusted to a target strength.
    AcidAdjustment,
    /// Set into a gel.
    Gelification,
}

impl Technique {
    /// Human-readable label for recipe display.
    ///
    /// Exhaustive on purpose: a new technique kind has to pick its label
    /// here.
    pub fn label(&self) -> String {
        match self {
            Technique::Infusion { ingredient } => format!("{ingredient}-infused"),
            Technique::FatWash { fat } => format!("{fat} fat-washed"),
            Technique::MilkWash => "milk-washed".to_string(),
            Technique::Clarification => "clarified".to_string(),
            Technique::Temperature { state } => state.label().to_string(),
            Technique::Muddled => "muddled".to_string(),
            Technique::Cut => "cut".to_string(),
            Technique::Maturity { state } => state.clone(),
            Technique::Application { method } => method.label().to_string(),
            Technique::AcidAdjustment => "acid-adjusted".to_string(),
            Technique::Gelification => "gelified".to_string(),
        }
    }

    /// The application method, when this technique is an application.
    pub fn application_method(&self) -> Option<ApplicationMethod> {
        match self {
            Technique::Application { method } => Some(*method),
            _ => None,
        }
    }
}
