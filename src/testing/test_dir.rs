// Copyright 2025 Seth Pendergrass. See LICENSE.

//! Helper for setting up test directories. The engine never reads media
//! containers, so plain byte files stand in for photos and videos.

use std::{
  collections::{HashSet, VecDeque},
  env, fs,
  path::{Path, PathBuf},
  sync::LazyLock,
};

static TEST_ROOT: LazyLock<PathBuf> =
  LazyLock::new(|| env::temp_dir().join(format!("{}_tests", env!("CARGO_PKG_NAME"))));

/// A per-test directory under the OS temp dir, recreated fresh on each run.
pub struct TestDir {
  root: PathBuf,
}

impl TestDir {
  /// Creates a new directory under `TEST_ROOT` populated with `files`.
  /// Note: Prefer using the `test_dir!()` macro.
  pub fn new(test_path: PathBuf, files: Vec<(&'static str, &'static str)>) -> Self {
    let root_rel = TEST_ROOT.join(test_path);
    if root_rel.exists() {
      fs::remove_dir_all(&root_rel).unwrap();
    }
    fs::create_dir_all(&root_rel).unwrap();

    let root = root_rel.canonicalize().unwrap();

    for (file, contents) in files {
      let path = root.join(file);
      fs::create_dir_all(path.parent().unwrap()).unwrap();
      fs::write(path, contents).unwrap();
    }

    Self { root }
  }

  /// All files under the test root, recursively.
  pub fn files(&self) -> HashSet<PathBuf> {
    let mut dirs = VecDeque::from([self.root.clone()]);
    let mut files = HashSet::new();

    while let Some(dir) = dirs.pop_front() {
      for entry in fs::read_dir(dir).unwrap().map(Result::unwrap) {
        if entry.file_type().unwrap().is_dir() {
          dirs.push_back(entry.path());
        } else {
          files.insert(entry.path());
        }
      }
    }

    files
  }

  pub fn get_path(&self, file: impl AsRef<Path>) -> PathBuf {
    self.root.join(file)
  }

  pub fn root(&self) -> &Path {
    &self.root
  }
}

#[macro_export]
macro_rules! test_path {
  () => {{
    // HACK: Get module hierarchy for caller.
    let mut function = $crate::testing::type_of(|| ()).rsplit("::");
    // 0th element is `{closure}`.
    let case = function.nth(1).unwrap();
    let suite = function.next().unwrap();
    let module = function.next().unwrap();

    std::path::PathBuf::from(format!("{module}/{suite}/{case}"))
  }};
}

#[macro_export]
macro_rules! test_dir {
  ($($file:literal: $contents:literal),* $(,)?) => {{
    let files = vec![$(($file, $contents)),*];
    $crate::testing::TestDir::new(test_path!(), files)
  }};
}
