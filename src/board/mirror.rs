//! Notice mirroring — copies a link's note onto the notice board.
//!
//! A note that mentions a date ("progress check 1/15") is usually an
//! announcement, so link creation mirrors it to the board automatically.
//! Note edits mirror only when the editor asks. The mirrored notice is an
//! independent copy; editing or deleting the link later leaves it alone.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::NoticeStore;
use crate::models::{Link, Notice, StoreError};

/// Matches date-like fragments such as "1/15" or "2026-01".
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,4}[-/]\d{1,2}").expect("date pattern is valid"));

pub fn note_mentions_date(note: &str) -> bool {
    DATE_PATTERN.is_match(note)
}

/// The mirrored body: the note text plus an inline anchor back to the
/// source link, in the exact markup the board UI renders.
fn mirrored_content(note: &str, link: &Link) -> String {
    format!(
        "{} <a href='{}' target='_blank' style='text-decoration: underline; color: inherit;'>[{}]</a>",
        note, link.url, link.title
    )
}

/// Mirror `link`'s note onto the notice board.
///
/// With `forced` unset (the creation path) the note is mirrored only when
/// it mentions a date; with `forced` set (the explicit flag on note edits)
/// it is mirrored regardless. An empty note never mirrors. Returns the
/// created notice, if any.
pub fn mirror_link_note(
    notices: &NoticeStore,
    link: &Link,
    forced: bool,
) -> Result<Option<Notice>, StoreError> {
    let note = link.note.trim();
    if note.is_empty() {
        return Ok(None);
    }
    if !forced && !note_mentions_date(note) {
        return Ok(None);
    }
    let notice = notices.add(&mirrored_content(note, link))?;
    Ok(Some(notice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn link_with_note(note: &str) -> Link {
        Link {
            id: 1,
            url: "https://example.com/event".to_string(),
            title: "Event page".to_string(),
            description: String::new(),
            image: String::new(),
            favicon: String::new(),
            note: note.to_string(),
        }
    }

    #[test]
    fn test_date_pattern() {
        assert!(note_mentions_date("Event on 1/15 please join"));
        assert!(note_mentions_date("due 2026-01"));
        assert!(note_mentions_date("租期至 3/31 止"));
        assert!(!note_mentions_date("no dates here"));
        assert!(!note_mentions_date(""));
    }

    #[test]
    fn test_create_path_mirrors_dated_note() {
        let dir = tempdir().unwrap();
        let notices = NoticeStore::new(dir.path().join("notice.txt"));

        let link = link_with_note("Event on 1/15 please join");
        let mirrored = mirror_link_note(&notices, &link, false).unwrap();
        assert!(mirrored.is_some());

        let board = notices.list();
        assert_eq!(board.len(), 1);
        assert!(board[0].content.contains("1/15"));
        assert!(board[0].content.contains("https://example.com/event"));
        assert!(board[0].content.contains("[Event page]"));
    }

    #[test]
    fn test_create_path_skips_undated_note() {
        let dir = tempdir().unwrap();
        let notices = NoticeStore::new(dir.path().join("notice.txt"));

        let link = link_with_note("no dates here");
        let mirrored = mirror_link_note(&notices, &link, false).unwrap();
        assert!(mirrored.is_none());
        assert!(notices.list().is_empty());
    }

    #[test]
    fn test_forced_mirrors_without_date() {
        let dir = tempdir().unwrap();
        let notices = NoticeStore::new(dir.path().join("notice.txt"));

        let link = link_with_note("no dates here");
        let mirrored = mirror_link_note(&notices, &link, true).unwrap();
        assert!(mirrored.is_some());
        assert_eq!(notices.list().len(), 1);
    }

    #[test]
    fn test_empty_note_never_mirrors() {
        let dir = tempdir().unwrap();
        let notices = NoticeStore::new(dir.path().join("notice.txt"));

        let link = link_with_note("   ");
        assert!(mirror_link_note(&notices, &link, false).unwrap().is_none());
        assert!(mirror_link_note(&notices, &link, true).unwrap().is_none());
        assert!(notices.list().is_empty());
    }
}
