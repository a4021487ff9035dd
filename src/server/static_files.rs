//! The default static-file responder.

use std::io;
use std::path::PathBuf;

use chrono::Local;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::parser::Request;
use crate::server::handler::{Handler, HandlerFuture};
use crate::server::mime;
use crate::server::response::ResponseHead;

/// The one path whose content is rendered per request instead of served
/// verbatim.
const TEMPLATED_PATH: &str = "/classic.html";

/// The token replaced with the current local time in the templated page.
const TIME_TOKEN: &str = "{time}";

/// Fallback responder used when no custom handler is registered for a
/// whitelisted path: resolves the request path under the public root and
/// streams the file back with a 200 head.
///
/// Path safety comes from the whitelist, not from this responder. It must
/// only ever see paths that already passed the whitelist check.
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    /// Create a responder serving files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a request path to its location on disk.
    ///
    /// The leading slash is stripped so the request path joins below the
    /// root instead of replacing it.
    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    async fn serve(
        &self,
        request: &Request,
        out: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> io::Result<()> {
        let file_path = self.resolve(&request.path);
        let content_type = mime::guess(&file_path);

        // The templated page is read whole and rendered per request, so its
        // Content-Length reflects the substituted body rather than the file.
        if request.path == TEMPLATED_PATH {
            let template = tokio::fs::read_to_string(&file_path).await?;
            let body = template.replace(TIME_TOKEN, &local_timestamp());
            ResponseHead::ok(content_type, body.len() as u64)
                .write_to(out)
                .await?;
            out.write_all(body.as_bytes()).await?;
            return out.flush().await;
        }

        // Everything else streams straight from disk.
        let mut file = File::open(&file_path).await?;
        let content_length = file.metadata().await?.len();
        ResponseHead::ok(content_type, content_length)
            .write_to(out)
            .await?;
        tokio::io::copy(&mut file, out).await?;
        out.flush().await
    }
}

impl Handler for StaticFiles {
    fn handle<'a>(
        &'a self,
        request: &'a Request,
        out: &'a mut (dyn AsyncWrite + Unpin + Send),
    ) -> HandlerFuture<'a> {
        Box::pin(self.serve(request, out))
    }
}

/// The current local wall-clock time as an ISO-style string.
fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}
