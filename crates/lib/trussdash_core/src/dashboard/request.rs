//! Widget data requests: turn a widget's endpoint and filters into a
//! concrete vendor API call.

use std::collections::{BTreeMap, HashSet};

use url::Url;

use super::DashboardError;
use crate::models::dashboard::WidgetConfig;

/// Base used only to borrow `Url`'s path-segment encoding.
const ENCODING_BASE: &str = "http://widget.invalid/";

/// A resolved GET request for a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDataRequest {
    /// Percent-encoded path, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// Resolve the request a widget issues to fetch its data.
///
/// The template (or, failing that, the concrete path) has each `{name}`
/// placeholder replaced by the filter of the same name. Filters not consumed
/// by a placeholder become query parameters; empty ones are dropped.
pub fn data_request(widget: &WidgetConfig) -> Result<WidgetDataRequest, DashboardError> {
    let template = widget
        .endpoint_template
        .as_deref()
        .or(widget.endpoint_path.as_deref())
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            DashboardError::Validation(format!("widget {} has no endpoint", widget.id))
        })?;

    let mut consumed = HashSet::new();
    let segments = template
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let resolved = substitute(segment, &widget.filters, &mut consumed)?;
            check_segment(&resolved)?;
            Ok(resolved)
        })
        .collect::<Result<Vec<_>, DashboardError>>()?;

    let query = widget
        .filters
        .iter()
        .filter(|(name, value)| !consumed.contains(name.as_str()) && !value.is_empty())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(WidgetDataRequest {
        path: encode_path(&segments)?,
        query,
    })
}

impl WidgetConfig {
    /// See [`data_request`].
    pub fn data_request(&self) -> Result<WidgetDataRequest, DashboardError> {
        data_request(self)
    }
}

fn substitute<'a>(
    segment: &str,
    filters: &'a BTreeMap<String, String>,
    consumed: &mut HashSet<&'a str>,
) -> Result<String, DashboardError> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|c| open + c) else {
            break;
        };
        out.push_str(&rest[..open]);
        let name = &rest[open + 1..close];
        let (key, value) = filters
            .get_key_value(name)
            .filter(|(_, v)| !v.is_empty())
            .ok_or_else(|| {
                DashboardError::Validation(format!("missing value for path parameter '{name}'"))
            })?;
        consumed.insert(key.as_str());
        out.push_str(value);
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// `.` and `..` would be resolved by URL normalisation, not encoded.
fn check_segment(segment: &str) -> Result<(), DashboardError> {
    if segment == "." || segment == ".." {
        return Err(DashboardError::Validation(format!(
            "path segment '{segment}' is not allowed"
        )));
    }
    Ok(())
}

fn encode_path(segments: &[String]) -> Result<String, DashboardError> {
    let mut url = Url::parse(ENCODING_BASE)
        .map_err(|e| DashboardError::Validation(format!("path encoding failed: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| DashboardError::Validation("path encoding failed".into()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}
