use std::path::PathBuf;

use crate::{
    compile::config::compile_config,
    composition::dsl::Composition,
    composition::model::MediaSource,
    foundation::error::{FramecastError, FramecastResult},
};

/// Form-part name carrying the JSON-serialized encode config.
pub const CONFIG_PART: &str = "config";

/// Body of one multipart form part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartBody {
    /// UTF-8 text value.
    Text(String),
    /// File streamed from disk by the transport.
    File(PathBuf),
    /// In-memory bytes with a file name for the part.
    Bytes {
        /// File name reported in the multipart part.
        file_name: String,
        /// Raw bytes.
        data: Vec<u8>,
    },
}

/// One named part of the multipart submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    /// Part name: `url<id>` or `file<id>` for media, [`CONFIG_PART`] for the
    /// config.
    pub name: String,
    /// Part body.
    pub body: PartBody,
}

/// Success payload returned by the rendering service for a submission.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EncodeResponse {
    /// Id of the created encode job.
    pub id: String,
    /// Initial job status.
    pub status: String,
    /// Server-side submission timestamp (epoch seconds).
    pub timestamp: u64,
}

/// The injected submission collaborator.
///
/// Implementations own HTTP method, headers, authentication, and any retry
/// policy; this crate never retries. The call blocks until the service
/// resolves or rejects the submission; cancellation is not supported.
pub trait EncodeTransport {
    /// Submit one multipart request and return the service response.
    fn submit(&self, parts: Vec<FormPart>) -> FramecastResult<EncodeResponse>;
}

/// Build the full multipart submission for a composition: one media part per
/// media-backed layer, keyed `url<id>` or `file<id>` in layer order, then
/// the `config` part holding the generated encode config as JSON.
///
/// Config-generation failures surface here, before any transport call.
pub fn build_request_parts(comp: &Composition) -> FramecastResult<Vec<FormPart>> {
    let config = compile_config(comp)?;
    let config_json = serde_json::to_string(&config)
        .map_err(|e| FramecastError::serde(format!("encode config did not serialize: {e}")))?;

    let mut parts = Vec::new();
    for layer in comp.layers() {
        let Some(source) = comp.media_for(layer.id()) else {
            continue;
        };
        let part = match source {
            MediaSource::Url(url) => FormPart {
                name: format!("url{}", layer.id()),
                body: PartBody::Text(url.clone()),
            },
            MediaSource::File(path) => FormPart {
                name: format!("file{}", layer.id()),
                body: PartBody::File(path.clone()),
            },
            MediaSource::Bytes { file_name, data } => FormPart {
                name: format!("file{}", layer.id()),
                body: PartBody::Bytes {
                    file_name: file_name.clone(),
                    data: data.clone(),
                },
            },
        };
        parts.push(part);
    }
    parts.push(FormPart {
        name: CONFIG_PART.to_string(),
        body: PartBody::Text(config_json),
    });
    Ok(parts)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/request.rs"]
mod tests;
