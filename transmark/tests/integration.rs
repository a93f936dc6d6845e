#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use std::fs;

use tempfile::tempdir;
use transmark::{stamp, sync};

const OLD_SOURCE: &str = "# document {version=\"4_18\"}\n\n\
                          Introduction.\n\n\
                          ## first heading {#first}\n\n\
                          Old explanation.\n\n\
                          ## second heading {#second}\n\n\
                          Unchanged explanation.\n";

const FRENCH_SOURCE: &str = "# document {version=\"4_18\"}\n\n\
                             Introduction.\n\n\
                             ## premier titre {#first translated=\"4_18\"}\n\n\
                             Ancienne explication.\n\n\
                             ## deuxième rubrique {#second translated=\"4_18\"}\n\n\
                             Explication inchangée.\n";

#[test]
fn test_sync_updates_locale_copies() {
  let tmp = tempdir().expect("tempdir");
  let new_source = OLD_SOURCE
    .replace("Old", "New")
    .replace("version=\"4_18\"", "version=\"4_19\"");

  let current_path = tmp.path().join("userguide.markdown");
  fs::write(&current_path, &new_source).expect("write current");
  let old_path = tmp.path().join("userguide-old.markdown");
  fs::write(&old_path, OLD_SOURCE).expect("write old");

  let french_dir = tmp.path().join("fr");
  fs::create_dir(&french_dir).expect("mkdir fr");
  let french_path = french_dir.join("userguide.markdown");
  fs::write(&french_path, FRENCH_SOURCE).expect("write fr");

  // A locale directory without a mirrored copy is skipped silently.
  let german_dir = tmp.path().join("de");
  fs::create_dir(&german_dir).expect("mkdir de");
  fs::write(german_dir.join("other.markdown"), "# other\n")
    .expect("write de/other");

  sync::run(&current_path, &old_path).expect("sync");

  let want = "# document {version=\"4_19\"}\n\n\
              Introduction.\n\n\
              ## premier titre {#first translated=\"4_18\"}\n\n\
              Ancienne explication.\n\n\
              ## deuxième rubrique {#second translated=\"4_19\"}\n\n\
              Explication inchangée.\n";
  let updated = fs::read_to_string(&french_path).expect("read fr");
  assert_eq!(updated, want);

  // The untouched locale gained no mirrored file, and the source document
  // itself was not rewritten.
  assert!(!german_dir.join("userguide.markdown").exists());
  assert_eq!(
    fs::read_to_string(&current_path).expect("read current"),
    new_source
  );
}

#[test]
fn test_sync_rejects_translation_without_headings() {
  let tmp = tempdir().expect("tempdir");
  let current_path = tmp.path().join("userguide.markdown");
  fs::write(&current_path, OLD_SOURCE).expect("write current");
  let old_path = tmp.path().join("userguide-old.markdown");
  fs::write(&old_path, OLD_SOURCE).expect("write old");

  let locale_dir = tmp.path().join("fr");
  fs::create_dir(&locale_dir).expect("mkdir fr");
  let translation_path = locale_dir.join("userguide.markdown");
  fs::write(&translation_path, "no headings here\n").expect("write fr");

  let result = sync::run(&current_path, &old_path);
  assert!(result.is_err());
  // The failed file was not rewritten.
  assert_eq!(
    fs::read_to_string(&translation_path).expect("read fr"),
    "no headings here\n"
  );
}

#[test]
fn test_stamp_adds_todo_markers() {
  let tmp = tempdir().expect("tempdir");
  let path = tmp.path().join("userguide.markdown");
  fs::write(&path, OLD_SOURCE).expect("write");

  stamp::run(&path).expect("stamp");

  let want = "# document {version=\"4_18\"}\n\n\
              Introduction.\n\n\
              ## first heading {#first translated=\"TODO\"}\n\n\
              Old explanation.\n\n\
              ## second heading {#second translated=\"TODO\"}\n\n\
              Unchanged explanation.\n";
  assert_eq!(fs::read_to_string(&path).expect("read"), want);
}

#[test]
fn test_stamp_refuses_to_run_twice() {
  let tmp = tempdir().expect("tempdir");
  let path = tmp.path().join("userguide.markdown");
  fs::write(&path, FRENCH_SOURCE).expect("write");

  let result = stamp::run(&path);
  assert!(result.is_err());
  assert_eq!(
    fs::read_to_string(&path).expect("read"),
    FRENCH_SOURCE,
    "a refused stamp must leave the file untouched"
  );
}
