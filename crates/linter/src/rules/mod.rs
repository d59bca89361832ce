/// Rule implementations.
///
/// Each rule lives in its own file and implements one of the trait types:
/// - `TargetLintRule` - pure rules that inspect the bound value
/// - `RegistryLintRule` - configuration rules that mutate the rule registry
mod api_info_schema;
mod count_resource_types;
mod location_header;
mod override_severity;
mod problem_details_responses;
mod problem_schema;

pub use api_info_schema::{ApiInfoSchemaRule, SEMVER_PATTERN};
pub use count_resource_types::CountResourceTypesRule;
pub use location_header::LocationHeaderRule;
pub use override_severity::{OverrideSeverityOptions, OverrideSeverityRule};
pub use problem_details_responses::ProblemDetailsResponsesRule;
pub use problem_schema::ProblemSchemaRule;
