//! Tests for the cache and the local sources.

use std::{
  sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
  },
  time::Duration,
};

use castaway_core::{Contestant, DataSource, Season, Tribe};

use tokio::{
  io::{AsyncReadExt as _, AsyncWriteExt as _},
  net::TcpListener,
};

use crate::{
  CachedSource, Collection, DEFAULT_TTL, DirSource, HttpConfig, HttpSource, MemorySource,
  SourceError,
};

/// Counts reads and fails on demand.
#[derive(Default)]
struct Flaky {
  calls:   AtomicUsize,
  failing: AtomicBool,
  seasons: Vec<Season>,
}

impl Flaky {
  fn with_seasons(names: &[&str]) -> Self {
    Self {
      seasons: names
        .iter()
        .map(|n| Season { season: (*n).into(), ..Default::default() })
        .collect(),
      ..Default::default()
    }
  }

  fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

  fn fail(&self, failing: bool) { self.failing.store(failing, Ordering::SeqCst) }

  fn outcome<T>(&self, data: Arc<[T]>) -> Result<Arc<[T]>, SourceError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.failing.load(Ordering::SeqCst) {
      Err(SourceError::Io {
        path:   "upstream".into(),
        source: std::io::Error::other("unreachable"),
      })
    } else {
      Ok(data)
    }
  }
}

impl DataSource for Flaky {
  type Error = SourceError;

  async fn contestants(&self) -> Result<Arc<[Contestant]>, SourceError> {
    self.outcome(Arc::from(Vec::new()))
  }

  async fn seasons(&self) -> Result<Arc<[Season]>, SourceError> {
    self.outcome(self.seasons.clone().into())
  }

  async fn tribes(&self) -> Result<Arc<[Tribe]>, SourceError> {
    self.outcome(Arc::from(Vec::new()))
  }
}

// ─── Cache ───────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn second_read_within_ttl_is_served_from_memory() {
  let cache = CachedSource::new(Flaky::with_seasons(&["Borneo"]));

  let first = cache.seasons().await.unwrap();
  tokio::time::advance(DEFAULT_TTL - Duration::from_secs(1)).await;
  let second = cache.seasons().await.unwrap();

  assert_eq!(cache.inner().calls(), 1);
  assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test(start_paused = true)]
async fn read_after_ttl_refetches() {
  let cache = CachedSource::with_ttl(Flaky::with_seasons(&["Borneo"]), Duration::from_secs(10));

  cache.seasons().await.unwrap();
  tokio::time::advance(Duration::from_secs(10)).await;
  cache.seasons().await.unwrap();
  assert_eq!(cache.inner().calls(), 1, "exactly at the TTL is still fresh");

  tokio::time::advance(Duration::from_millis(1)).await;
  cache.seasons().await.unwrap();
  assert_eq!(cache.inner().calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn collections_expire_independently() {
  let cache = CachedSource::with_ttl(Flaky::default(), Duration::from_secs(10));

  cache.seasons().await.unwrap();
  tokio::time::advance(Duration::from_secs(6)).await;
  cache.tribes().await.unwrap();
  tokio::time::advance(Duration::from_secs(6)).await;

  // Seasons are now 12s old, tribes 6s.
  cache.tribes().await.unwrap();
  assert_eq!(cache.inner().calls(), 2);
  cache.seasons().await.unwrap();
  assert_eq!(cache.inner().calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn clear_forces_refetch() {
  let cache = CachedSource::new(Flaky::default());

  cache.contestants().await.unwrap();
  cache.seasons().await.unwrap();
  cache.clear();
  cache.contestants().await.unwrap();
  cache.seasons().await.unwrap();

  assert_eq!(cache.inner().calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_keeps_previous_copy() {
  let cache = CachedSource::with_ttl(Flaky::with_seasons(&["Borneo"]), Duration::from_secs(10));
  let first = cache.seasons().await.unwrap();

  tokio::time::advance(Duration::from_secs(11)).await;
  cache.inner().fail(true);
  assert!(matches!(cache.seasons().await, Err(SourceError::Io { .. })));

  // Still expired, so the next read tries again and succeeds.
  cache.inner().fail(false);
  let again = cache.seasons().await.unwrap();
  assert_eq!(again[0].season, first[0].season);
  assert_eq!(cache.inner().calls(), 3);
}

#[tokio::test]
async fn failure_on_empty_slot_propagates() {
  let flaky = Flaky::default();
  flaky.fail(true);
  let cache = CachedSource::new(flaky);
  assert!(cache.tribes().await.is_err());
  assert!(cache.tribes().await.is_err());
  assert_eq!(cache.inner().calls(), 2);
}

// ─── Local sources ───────────────────────────────────────────────────────────

#[tokio::test]
async fn memory_source_returns_shared_collections() {
  let source = MemorySource::new(
    vec![Contestant { contestant_name: "Richard Hatch".into(), ..Default::default() }],
    vec![],
    vec![],
  );
  let a = source.contestants().await.unwrap();
  let b = source.contestants().await.unwrap();
  assert!(Arc::ptr_eq(&a, &b));
  assert!(source.seasons().await.unwrap().is_empty());
}

#[tokio::test]
async fn dir_source_reads_and_decodes_tables() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(
    dir.path().join("contestants.csv"),
    "contestant_name,age,hometown,num_season,finish\n\
     Richard Hatch,39,\"Newport, RI\",1,1\n\
     \n\
     Kelly Wiglesworth,22,\"Kernville, CA\",1,2\n",
  )
  .unwrap();
  std::fs::write(dir.path().join("seasons.csv"), "num_season,season,winner\n1,Borneo,Richard Hatch\n")
    .unwrap();

  let source = DirSource::new(dir.path());
  let contestants = source.contestants().await.unwrap();
  assert_eq!(contestants.len(), 2);
  assert_eq!(contestants[0].homestate, "RI");
  assert_eq!(contestants[1].age, Some(22));

  let seasons = source.seasons().await.unwrap();
  assert_eq!(seasons[0].winner, "Richard Hatch");

  match source.tribes().await {
    Err(SourceError::Io { path, .. }) => assert!(path.ends_with(Collection::Tribes.file_name())),
    other => panic!("expected an io error, got {other:?}"),
  }
}

#[tokio::test]
async fn dir_source_reports_which_table_failed_to_decode() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("tribes.csv"), "").unwrap();

  let err = DirSource::new(dir.path()).tribes().await.unwrap_err();
  assert!(matches!(err, SourceError::Csv { collection: Collection::Tribes, .. }));
}

// ─── HTTP source ─────────────────────────────────────────────────────────────

/// Answer every request on a loopback port with `status` and `body`, and
/// return the base URL.
async fn serve(status: &'static str, body: &'static str) -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    while let Ok((mut stream, _)) = listener.accept().await {
      let mut buf = vec![0u8; 8192];
      let mut read = 0;
      while read < buf.len() {
        let n = stream.read(&mut buf[read..]).await.unwrap_or(0);
        if n == 0 {
          break;
        }
        read += n;
        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
          break;
        }
      }
      let response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: text/csv\r\ncontent-length: {}\r\n\
         connection: close\r\n\r\n{body}",
        body.len()
      );
      let _ = stream.write_all(response.as_bytes()).await;
      let _ = stream.shutdown().await;
    }
  });
  format!("http://{addr}")
}

fn http_config(base: &str) -> HttpConfig {
  HttpConfig {
    contestants_url: format!("{base}/contestants.csv"),
    seasons_url:     format!("{base}/seasons.csv"),
    tribes_url:      format!("{base}/tribes.csv"),
    timeout_secs:    5,
  }
}

#[tokio::test]
async fn http_source_decodes_a_successful_response() {
  let base = serve(
    "200 OK",
    "contestant_name,age,hometown,num_season,finish\n\
     Richard Hatch,39,\"Newport, RI\",1,1\n\
     Kelly Wiglesworth,22,\"Kernville, CA\",1,2\n",
  )
  .await;
  let source = HttpSource::new(http_config(&base)).unwrap();

  let contestants = source.contestants().await.unwrap();
  assert_eq!(contestants.len(), 2);
  assert_eq!(contestants[0].contestant_name, "Richard Hatch");
  assert_eq!(contestants[0].homestate, "RI");
  assert_eq!(contestants[1].age, Some(22));
}

#[tokio::test]
async fn http_source_rejects_a_non_success_status() {
  let base = serve("404 Not Found", "missing").await;
  let source = HttpSource::new(http_config(&base)).unwrap();

  match source.seasons().await {
    Err(SourceError::Status { url, status }) => {
      assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
      assert!(url.ends_with("/seasons.csv"));
    }
    other => panic!("expected a status error, got {other:?}"),
  }
}
