//! Rate-limited catalog client.

use std::sync::Arc;

use log::debug;
use romshelf_core::GameEntity;
use tokio::sync::{Mutex, Semaphore, watch};
use tokio::time::{Duration, Instant};

use crate::category::ImageCategory;
use crate::credentials::Credentials;
use crate::error::ArtworkError;
use crate::response;
use crate::systems::catalog_platform;
use crate::types::{CatalogSession, ImageCandidate};

/// Name stamped on every candidate this provider produces.
pub const PROVIDER_NAME: &str = "EmuMovies";

/// Ordinal for host orchestrators running several image providers. The
/// catalog's images are lower resolution, so it runs after richer sources.
pub const PROVIDER_ORDER: u32 = 1;

const BASE_URL: &str = "https://api.emumovies.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the artwork catalog.
///
/// Holds the lazily-created session and the shared concurrency gate.
/// Every network call this client makes — login, per-category searches,
/// and raw image fetches — takes a permit from the same gate, bounding
/// outstanding catalog requests no matter how many games are being
/// enriched at once.
pub struct ArtworkClient {
    http: reqwest::Client,
    creds: Credentials,
    base_url: String,
    limiter: Arc<Semaphore>,
    session: Mutex<Option<CatalogSession>>,
}

impl ArtworkClient {
    /// Create a client allowing at most `max_in_flight` concurrent
    /// catalog requests.
    pub fn new(creds: Credentials, max_in_flight: usize) -> Result<Self, ArtworkError> {
        Self::with_base(creds, max_in_flight, BASE_URL)
    }

    fn with_base(
        creds: Credentials,
        max_in_flight: usize,
        base_url: &str,
    ) -> Result<Self, ArtworkError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            creds,
            base_url: base_url.to_string(),
            limiter: Arc::new(Semaphore::new(max_in_flight)),
            session: Mutex::new(None),
        })
    }

    /// Fetch candidate images for a game, one search per category.
    ///
    /// Best-effort: no obtainable session token, a failed query, or a
    /// malformed response all contribute zero candidates rather than an
    /// error, and nothing is retried. Cancellation stops further queries
    /// and aborts the in-flight one; whatever was already collected is
    /// discarded in favor of "no further results".
    pub async fn fetch_images(
        &self,
        game: &GameEntity,
        categories: &[ImageCategory],
        mut cancel: watch::Receiver<bool>,
    ) -> Vec<ImageCandidate> {
        let Some(token) = self.session_token(&mut cancel).await else {
            return Vec::new();
        };

        let name = query_name(game);
        let platform = catalog_platform(&game.system_id);

        let mut candidates = Vec::new();
        for &category in categories {
            if *cancel.borrow() {
                return Vec::new();
            }
            let url = search_url(&self.base_url, &name, platform, category.media_token(), &token);
            let Some(body) = self.get_text(&url, &mut cancel).await else {
                continue;
            };
            for url in response::result_urls(&body) {
                candidates.push(ImageCandidate {
                    source_name: PROVIDER_NAME,
                    category,
                    url,
                });
            }
        }
        // A cancellation that aborted the final query still lands here
        // with earlier categories collected; discard them too.
        if *cancel.borrow() {
            return Vec::new();
        }
        candidates
    }

    /// Fetch raw image bytes from a URL a previous lookup returned,
    /// through the same concurrency gate as the searches.
    pub async fn get_image(
        &self,
        url: &str,
        mut cancel: watch::Receiver<bool>,
    ) -> Option<Vec<u8>> {
        if *cancel.borrow() {
            return None;
        }
        let _permit = tokio::select! {
            permit = self.limiter.acquire() => permit.ok()?,
            _ = wait_cancelled(&mut cancel) => return None,
        };
        let request = async {
            let resp = self.http.get(url).send().await?.error_for_status()?;
            resp.bytes().await
        };
        tokio::select! {
            result = request => match result {
                Ok(bytes) => Some(bytes.to_vec()),
                Err(e) => {
                    debug!("image fetch failed: {e}");
                    None
                }
            },
            _ = wait_cancelled(&mut cancel) => None,
        }
    }

    /// The shared session token, logging in on first use.
    ///
    /// The session mutex is held across the login so concurrent lookups
    /// never race to authenticate twice.
    async fn session_token(&self, cancel: &mut watch::Receiver<bool>) -> Option<String> {
        let mut session = self.session.lock().await;
        if let Some(s) = session.as_ref() {
            return Some(s.token.clone());
        }

        let url = login_url(&self.base_url, &self.creds);
        let body = self.get_text(&url, cancel).await?;
        let token = response::session_token(&body)?;
        *session = Some(CatalogSession {
            token: token.clone(),
            obtained_at: Instant::now(),
        });
        Some(token)
    }

    /// Permit-gated GET returning the response body, `None` on any
    /// failure or cancellation.
    async fn get_text(&self, url: &str, cancel: &mut watch::Receiver<bool>) -> Option<String> {
        if *cancel.borrow() {
            return None;
        }
        let _permit = tokio::select! {
            permit = self.limiter.acquire() => permit.ok()?,
            _ = wait_cancelled(cancel) => return None,
        };
        let request = async {
            let resp = self.http.get(url).send().await?.error_for_status()?;
            resp.text().await
        };
        tokio::select! {
            result = request => match result {
                Ok(body) => Some(body),
                Err(e) => {
                    debug!("catalog request failed: {e}");
                    None
                }
            },
            _ = wait_cancelled(cancel) => None,
        }
    }
}

/// Resolve once the cancellation signal turns true; never resolve if the
/// sender goes away without cancelling.
async fn wait_cancelled(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow() {
            return;
        }
        if cancel.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

fn query_name(game: &GameEntity) -> String {
    match &game.name {
        Some(name) => name.clone(),
        None => game
            .primary_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

fn login_url(base: &str, creds: &Credentials) -> String {
    format!(
        "{base}/Login.aspx?user={}&api={}&product={}",
        urlencoding::encode(&creds.username),
        urlencoding::encode(&creds.api_key),
        urlencoding::encode(&creds.product),
    )
}

fn search_url(base: &str, name: &str, platform: &str, media: &str, token: &str) -> String {
    format!(
        "{base}/Search.aspx?search={}&system={platform}&media={media}&sessionid={token}",
        urlencoding::encode(name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn test_creds() -> Credentials {
        Credentials {
            username: "someone".to_string(),
            api_key: "key123".to_string(),
            product: "romshelf".to_string(),
        }
    }

    // Connection-refused endpoint: requests fail immediately, offline.
    fn unreachable_client() -> ArtworkClient {
        ArtworkClient::with_base(test_creds(), 3, "http://127.0.0.1:9").unwrap()
    }

    const LOGIN_BODY: &str = r#"<Results><Result Session="tok"/></Results>"#;
    const SEARCH_BODY: &str =
        r#"<Results><Result URL="http://images.example/a.png"/></Results>"#;

    struct TestCatalog {
        base_url: String,
        requests: Arc<AtomicUsize>,
        request_lines: Arc<std::sync::Mutex<Vec<String>>>,
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    buf.extend_from_slice(&chunk[..n]);
                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    // Minimal local catalog: answers login and searches, counts every
    // request, and stalls forever on requests containing `stall_on`.
    async fn spawn_catalog(stall_on: Option<&'static str>) -> TestCatalog {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(AtomicUsize::new(0));
        let request_lines = Arc::new(std::sync::Mutex::new(Vec::new()));

        let counter = Arc::clone(&requests);
        let lines = Arc::clone(&request_lines);
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let counter = Arc::clone(&counter);
                let lines = Arc::clone(&lines);
                tokio::spawn(async move {
                    let request = read_request(&mut stream).await;
                    counter.fetch_add(1, Ordering::SeqCst);
                    if let Some(line) = request.lines().next() {
                        lines.lock().unwrap().push(line.to_string());
                    }
                    if let Some(marker) = stall_on {
                        if request.contains(marker) {
                            std::future::pending::<()>().await;
                        }
                    }
                    let body = if request.starts_with("GET /Login.aspx") {
                        LOGIN_BODY
                    } else {
                        SEARCH_BODY
                    };
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                });
            }
        });

        TestCatalog {
            base_url,
            requests,
            request_lines,
        }
    }

    fn snes_game() -> GameEntity {
        GameEntity::single(
            PathBuf::from("/roms/snes/Super Metroid.sfc"),
            "SNES",
            "SNESGame",
        )
    }

    #[test]
    fn search_url_encodes_the_game_name() {
        let url = search_url(
            "http://c",
            "Super Metroid (USA)",
            "Super_Nintendo",
            "Snap",
            "tok",
        );
        assert_eq!(
            url,
            "http://c/Search.aspx?search=Super%20Metroid%20%28USA%29&system=Super_Nintendo&media=Snap&sessionid=tok"
        );
    }

    #[test]
    fn search_url_accepts_an_empty_platform_token() {
        let url = search_url("http://c", "Halo", "", "Cabinet", "tok");
        assert!(url.contains("&system=&media=Cabinet"));
    }

    #[test]
    fn query_name_falls_back_to_the_file_stem() {
        assert_eq!(query_name(&snes_game()), "Super Metroid");

        let mut named = snes_game();
        named.name = Some("Street Fighter II".to_string());
        assert_eq!(query_name(&named), "Street Fighter II");
    }

    #[tokio::test]
    async fn no_obtainable_token_yields_an_empty_result() {
        let client = unreachable_client();
        let (_tx, rx) = watch::channel(false);
        let images = client
            .fetch_images(
                &snes_game(),
                &[ImageCategory::Box, ImageCategory::Screenshot],
                rx,
            )
            .await;
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn cancelled_lookup_yields_no_results_without_any_request() {
        let client = unreachable_client();
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();
        let images = client.fetch_images(&snes_game(), &[ImageCategory::Box], rx).await;
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn cancellation_during_a_query_discards_collected_candidates() {
        // The Box search answers with one URL; the Screenshot search
        // stalls until the cancel signal fires mid-flight. Nothing from
        // the completed category may leak through.
        let catalog = spawn_catalog(Some("media=Snap")).await;
        let client = ArtworkClient::with_base(test_creds(), 3, &catalog.base_url).unwrap();
        let (tx, rx) = watch::channel(false);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = tx.send(true);
        });
        let images = client
            .fetch_images(
                &snes_game(),
                &[ImageCategory::Box, ImageCategory::Screenshot],
                rx,
            )
            .await;
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn one_query_per_category_even_without_a_catalog_platform() {
        let catalog = spawn_catalog(None).await;
        let client = ArtworkClient::with_base(test_creds(), 3, &catalog.base_url).unwrap();
        let (_tx, rx) = watch::channel(false);
        let game = GameEntity::single(
            PathBuf::from("/roms/x360/halo.iso"),
            "Xbox360",
            "Xbox360Game",
        );
        let images = client
            .fetch_images(&game, &[ImageCategory::Box, ImageCategory::Screenshot], rx)
            .await;

        // One login plus one search per requested category.
        assert_eq!(catalog.requests.load(Ordering::SeqCst), 3);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].category, ImageCategory::Box);
        assert_eq!(images[1].category, ImageCategory::Screenshot);
        assert!(images.iter().all(|i| i.source_name == PROVIDER_NAME));

        // Xbox360 has no catalog equivalent; both searches still go out,
        // carrying an empty platform token.
        let lines = catalog.request_lines.lock().unwrap();
        let searches: Vec<_> = lines
            .iter()
            .filter(|l| l.contains("/Search.aspx"))
            .collect();
        assert_eq!(searches.len(), 2);
        assert!(searches.iter().all(|l| l.contains("system=&")));
    }

    #[tokio::test]
    async fn cancelled_image_fetch_yields_none() {
        let client = unreachable_client();
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();
        assert!(client.get_image("http://127.0.0.1:9/a.png", rx).await.is_none());
    }
}
