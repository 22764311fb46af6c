use super::domain::Responses;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("failed to read responses: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid responses CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid responses JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response for '{question}' is not an integer: '{value}'")]
    InvalidValue { question: String, value: String },
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    question_id: String,
    #[serde(default)]
    value: Option<String>,
}

/// Reads a `question_id,value` export. Rows with a blank value stay unanswered.
pub fn responses_from_csv<R: Read>(reader: R) -> Result<Responses, ResponseImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut responses = Responses::new();

    for record in csv_reader.deserialize::<ResponseRow>() {
        let row = record?;
        let Some(raw) = row.value.filter(|value| !value.is_empty()) else {
            continue;
        };
        let value = raw
            .parse::<i64>()
            .map_err(|_| ResponseImportError::InvalidValue {
                question: row.question_id.clone(),
                value: raw.clone(),
            })?;
        responses.insert(row.question_id, value);
    }

    Ok(responses)
}

pub fn responses_from_json<R: Read>(reader: R) -> Result<Responses, ResponseImportError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Chooses the format from the file extension: `.csv` or JSON otherwise.
pub fn responses_from_path<P: AsRef<Path>>(path: P) -> Result<Responses, ResponseImportError> {
    let path = path.as_ref();
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        responses_from_csv(file)
    } else {
        responses_from_json(file)
    }
}
