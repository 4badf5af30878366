//! Option catalog listing.

use crate::domain::catalog::{self, ASPECT_RATIO_OPTIONS};
use crate::domain::{CinematicOption, Parameter};

/// The selectable options of one parameter.
#[derive(Debug, Clone)]
pub struct ParameterOptions {
    pub parameter: Parameter,
    pub options: &'static [CinematicOption],
}

/// Options for `parameter`, or for every parameter in declared order.
pub fn execute(parameter: Option<Parameter>) -> Vec<ParameterOptions> {
    let parameters: Vec<Parameter> = match parameter {
        Some(parameter) => vec![parameter],
        None => Parameter::ALL.to_vec(),
    };

    parameters
        .into_iter()
        .map(|parameter| ParameterOptions { parameter, options: catalog::options(parameter) })
        .collect()
}

/// Aspect ratios accepted by image generation.
pub fn aspect_ratios() -> &'static [CinematicOption] {
    &ASPECT_RATIO_OPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_parameter_in_order() {
        let listing = execute(None);
        assert_eq!(listing.len(), Parameter::ALL.len());
        assert_eq!(listing[0].parameter, Parameter::ALL[0]);
        assert!(listing.iter().all(|entry| !entry.options.is_empty()));
    }

    #[test]
    fn single_parameter_listing() {
        let listing = execute(Some(Parameter::Weather));
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].options[0].value, catalog::default_value(Parameter::Weather));
    }
}
