use std::path::Path;

use searchengine::config::Config;
use searchengine::repositories::PageLoader;
use searchengine::AppState;

pub const PAGES: &str = include_str!("../fixtures/pages.txt");

pub fn state(web_root: &Path) -> AppState {
    let index = PageLoader::parse(PAGES.lines());
    let mut config = Config::default();
    config.server.web_root = web_root.to_path_buf();
    config.cache.entries = 16;
    AppState::new(index, config)
}

pub fn web_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp web root");
    std::fs::write(dir.path().join("index.html"), "<html><body>search</body></html>")
        .expect("write index.html");
    std::fs::write(dir.path().join("code.js"), "// client").expect("write code.js");
    std::fs::write(dir.path().join("style.css"), "body {}").expect("write style.css");
    dir
}
