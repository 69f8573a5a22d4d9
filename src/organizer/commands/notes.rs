use super::{rest, CmdMessage, CmdResult, Workspace};
use crate::error::{Result, ValidationError};
use crate::model::Note;
use crate::notes::SortKey;

/// `add-note <text> [tags...]`
pub fn add(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let tags = args[1..].to_vec();
    let id = ws.notes.add_note(&args[0], tags)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note {id} added."
    ))))
}

/// `delete-note <id>`
pub fn delete(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let id = &args[0];
    ws.notes.delete_note(id)?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note {id} deleted."
    ))))
}

/// `edit-note <id> <text...>`
pub fn edit(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let id = &args[0];
    ws.notes.edit_note(id, &rest(args, 1))?;
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Note {id} updated."
    ))))
}

/// `show-notes`
pub fn show(ws: &mut Workspace, _args: &[String]) -> Result<CmdResult> {
    Ok(listing(ws.notes.list_all()))
}

/// `find-tag <keyword>`
pub fn find_tag(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    Ok(listing(ws.notes.find_by_tag(&args[0])))
}

/// `find-note <keyword...>`
pub fn find_text(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    Ok(listing(ws.notes.search_text(&rest(args, 0))))
}

/// `add-tag <id> <tag>`
pub fn add_tag(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let message = if ws.notes.add_tag(&args[0], &args[1])? {
        CmdMessage::success("Tag added.")
    } else {
        CmdMessage::info("Tag already present.")
    };
    Ok(CmdResult::message(message))
}

/// `delete-tag <id> <tag>`
pub fn remove_tag(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let message = if ws.notes.remove_tag(&args[0], &args[1])? {
        CmdMessage::success("Tag removed.")
    } else {
        CmdMessage::info("Tag not present.")
    };
    Ok(CmdResult::message(message))
}

/// `sort-notes [date|tag-count|tag-name] [asc|desc]`
pub fn sort(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let (key, reverse) = match args {
        [] => (SortKey::default(), false),
        [order] if is_order(order) => (SortKey::default(), descending(order)?),
        [key] => (key.parse::<SortKey>()?, false),
        [key, order] => (key.parse::<SortKey>()?, descending(order)?),
        _ => return Err(ValidationError::UnsupportedSortOrder.into()),
    };
    Ok(listing(ws.notes.sorted_by(key, reverse)))
}

fn is_order(arg: &str) -> bool {
    arg.eq_ignore_ascii_case("asc") || arg.eq_ignore_ascii_case("desc")
}

fn descending(order: &str) -> Result<bool> {
    if !is_order(order) {
        return Err(ValidationError::UnsupportedSortOrder.into());
    }
    Ok(order.eq_ignore_ascii_case("desc"))
}

fn listing(notes: Vec<&Note>) -> CmdResult {
    if notes.is_empty() {
        return CmdResult::message(CmdMessage::info("No notes found."));
    }
    CmdResult::default().with_notes(notes)
}
