use super::{rest, CmdMessage, CmdResult, Workspace};
use crate::contacts::AddOutcome;
use crate::error::Result;

/// `add <name> <phone>`
pub fn add(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let message = match ws.contacts.add(&args[0], Some(&args[1]))? {
        AddOutcome::Added => "Contact added.",
        AddOutcome::Updated => "Contact updated.",
    };
    Ok(CmdResult::message(CmdMessage::success(message)))
}

/// `delete-contact <name>`
pub fn delete(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    ws.contacts.delete(&args[0])?;
    Ok(CmdResult::message(CmdMessage::success("Contact deleted.")))
}

/// `change <name> <old phone> <new phone>`
pub fn change(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    ws.contacts.edit_phone(&args[0], &args[1], &args[2])?;
    Ok(CmdResult::message(CmdMessage::success("Phone updated.")))
}

/// `search <keyword>` / `phone <keyword>`
pub fn search(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let found = ws.contacts.search(&args[0]);
    if found.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No contacts found.")));
    }
    Ok(CmdResult::default().with_contacts(found))
}

/// `all`
pub fn all(ws: &mut Workspace, _args: &[String]) -> Result<CmdResult> {
    if ws.contacts.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No contacts found.")));
    }
    Ok(CmdResult::default().with_contacts(ws.contacts.list_all()))
}

/// `add-phone <name> <phone>`
pub fn add_phone(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    ws.contacts.add_phone(&args[0], &args[1])?;
    Ok(CmdResult::message(CmdMessage::success("Phone added.")))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    ws.contacts.remove_phone(&args[0], &args[1])?;
    Ok(CmdResult::message(CmdMessage::success("Phone removed.")))
}

/// `add-email <name> <email>`
pub fn add_email(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    ws.contacts.add_email(&args[0], &args[1])?;
    Ok(CmdResult::message(CmdMessage::success("Email added.")))
}

/// `show-email <name>`
pub fn show_email(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let name = &args[0];
    let contact = ws.contacts.get(name)?;
    let message = match &contact.email {
        Some(email) => CmdMessage::info(format!("{name}'s email is {email}")),
        None => CmdMessage::warning(format!("{name} has no email set.")),
    };
    Ok(CmdResult::message(message))
}

/// `add-address <name> <address...>`
pub fn add_address(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    ws.contacts.add_address(&args[0], &rest(args, 1))?;
    Ok(CmdResult::message(CmdMessage::success("Address added.")))
}

/// `show-address <name>`
pub fn show_address(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let name = &args[0];
    let contact = ws.contacts.get(name)?;
    let message = match &contact.address {
        Some(address) => CmdMessage::info(format!("{name}'s address is {address}")),
        None => CmdMessage::warning(format!("{name} has no address set.")),
    };
    Ok(CmdResult::message(message))
}
