pub mod json_api;

pub use json_api::{
    event_list_schema, run_script, run_script_json, ScriptRequest, ScriptResponse, ScriptStep,
    StepResult, API_SCHEMA_VERSION,
};
