use std::collections::BTreeMap;

use super::codec::{decode, encode_matrix, encode_segment};

/// Matrix parameters of one path segment: name to comma-split values.
pub type MatrixParameters = BTreeMap<String, Vec<String>>;

/// A single path segment and the matrix parameters attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSegment {
    path: String,
    matrix_parameters: MatrixParameters,
}

impl PathSegment {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            matrix_parameters: MatrixParameters::new(),
        }
    }

    pub fn with_matrix_parameters(path: impl Into<String>, matrix_parameters: MatrixParameters) -> Self {
        Self {
            path: path.into(),
            matrix_parameters,
        }
    }

    /// Builds a segment from raw path text, percent-decoding the path and
    /// any `;name=v1,v2` matrix parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use odata_intake::path::segment::PathSegment;
    ///
    /// let segment = PathSegment::decode("seg;k=1,2;m=x");
    /// assert_eq!(segment.path(), "seg");
    /// assert_eq!(segment.matrix_parameter("k"), Some(&["1".to_string(), "2".to_string()][..]));
    /// assert_eq!(segment.matrix_parameter("m"), Some(&["x".to_string()][..]));
    /// ```
    pub fn decode(raw: &str) -> Self {
        match raw.split_once(';') {
            None => Self::new(decode(raw)),
            Some((path, parameters)) => {
                let matrix_parameters: MatrixParameters = parse_matrix_parameters(parameters)
                    .into_iter()
                    .map(|(name, values)| {
                        let values = values.iter().map(|v| decode(v)).collect::<Vec<_>>();
                        (decode(&name), values)
                    })
                    .collect();
                Self::with_matrix_parameters(decode(path), matrix_parameters)
            }
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn matrix_parameters(&self) -> &MatrixParameters {
        &self.matrix_parameters
    }

    pub fn matrix_parameter(&self, name: &str) -> Option<&[String]> {
        self.matrix_parameters.get(name).map(|values| values.as_slice())
    }

    /// Writes the segment back in path form: encoded path followed by
    /// `;name=v1,v2` for each matrix parameter.
    pub fn to_encoded(&self) -> String {
        let mut encoded = encode_segment(&self.path);
        for (name, values) in &self.matrix_parameters {
            encoded.push(';');
            encoded.push_str(&encode_matrix(name));
            encoded.push('=');
            let values: Vec<String> = values.iter().map(|v| encode_matrix(v)).collect();
            encoded.push_str(&values.join(","));
        }
        encoded
    }
}

/// Splits the text after a segment's first `;` into matrix parameters.
///
/// Groups are `;`-separated. A group without `=` yields a single empty
/// value; a repeated name replaces the earlier one. Values are not decoded.
pub(crate) fn parse_matrix_parameters(parameters: &str) -> MatrixParameters {
    parameters
        .split(';')
        .map(|group| match group.split_once('=') {
            Some((name, values)) => (name.to_string(), split_values(values)),
            None => (group.to_string(), vec![String::new()]),
        })
        .collect()
}

/// Comma-splits a value list, dropping trailing empty values but keeping a
/// lone empty value.
fn split_values(values: &str) -> Vec<String> {
    if values.is_empty() {
        return vec![String::new()];
    }

    let mut split: Vec<String> = values.split(',').map(str::to_string).collect();
    while split.last().is_some_and(|v| v.is_empty()) {
        split.pop();
    }
    split
}
