
use std::fmt::Display;
use std::fs;
use serde_json::Value;
use crate::error::{AnalysisError, Result};


#[derive(Clone, Debug, PartialEq)]
pub struct JsonTypes {
    pub dtm_file: Option<String>,
    pub text_files: Vec<String>,
    pub tweets_file: Option<String>,
    pub output_dir: String,
    pub lowercase: bool,
    pub normalize: bool,
    pub top_k: usize
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using params:
        dtm_file: {:?}
        text_files: {:?}
        tweets_file: {:?}
        output_dir: {}
        lowercase: {}
        normalize: {}
        top_k: {}",
        self.dtm_file, self.text_files, self.tweets_file, self.output_dir, self.lowercase, self.normalize, self.top_k)
    }
}

pub struct Config {
    params: JsonTypes
}

fn optional_str(json: &Value, key: &str) -> Result<Option<String>> {
    match json.get(key) {
        Some(Value::Null) | None => Ok(None),
        Some(v) => v.as_str()
            .map(|s| Some(s.to_owned()))
            .ok_or_else(|| AnalysisError::Config(format!("{} should be a string", key)))
    }
}

fn optional_bool(json: &Value, key: &str, default: bool) -> Result<bool> {
    match json.get(key) {
        Some(v) => v.as_bool().ok_or_else(|| AnalysisError::Config(format!("{} should be boolean", key))),
        None => Ok(default)
    }
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        self.params.clone()
    }

    /// Build the parameters from the program arguments, a single path to a json file.
    pub fn new(args: &[String]) -> Result<Config> {

        if args.len() != 2 {
            return Err(AnalysisError::Config("input should be a path to json file only".to_string()));
        }

        let f = fs::File::open(&args[1])?;
        let json: Value = serde_json::from_reader(f)?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Config> {

        // output dir is the only mandatory entry
        let output_dir = optional_str(json, "output_dir")?
        .ok_or_else(|| AnalysisError::Config("output_dir was not supplied through json".to_string()))?;

        // handle default vs input parameters
        let dtm_file = optional_str(json, "dtm_file")?;
        let tweets_file = optional_str(json, "tweets_file")?;
        let text_files = match json.get("text_files") {
            Some(Value::Array(files)) => files
                .iter()
                .map(|f| f.as_str().map(|s| s.to_owned()).ok_or_else(|| AnalysisError::Config("text_files should hold strings".to_string())))
                .collect::<Result<Vec<String>>>()?,
            Some(_) => return Err(AnalysisError::Config("text_files should be an array".to_string())),
            None => Vec::new()
        };
        let lowercase = optional_bool(json, "lowercase", true)?;
        let normalize = optional_bool(json, "normalize", false)?;
        let top_k = match json.get("top_k") {
            Some(top_k) => top_k.as_u64().ok_or_else(|| AnalysisError::Config("top_k should be a non negative integer".to_string()))? as usize,
            None => 10
        };

        let params = JsonTypes {
            dtm_file,
            text_files,
            tweets_file,
            output_dir,
            lowercase,
            normalize,
            top_k
        };

        Ok(Self { params })
    }

}
