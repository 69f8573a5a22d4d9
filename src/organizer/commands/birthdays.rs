use super::{CmdMessage, CmdResult, Workspace};
use crate::contacts::UpcomingBirthday;
use crate::error::{Result, ValidationError};

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    ws.contacts.add_birthday(&args[0], &args[1])?;
    Ok(CmdResult::message(CmdMessage::success("Birthday added.")))
}

/// `show-birthday <name>`
pub fn show_birthday(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let name = &args[0];
    let contact = ws.contacts.get(name)?;
    let message = match contact.birthday {
        Some(birthday) => CmdMessage::info(format!("{name}'s birthday is {birthday}")),
        None => CmdMessage::warning(format!("{name} has no birthday set.")),
    };
    Ok(CmdResult::message(message))
}

/// `birthdays`
pub fn upcoming(ws: &mut Workspace, _args: &[String]) -> Result<CmdResult> {
    Ok(listing(ws.contacts.get_upcoming_birthdays()))
}

/// `birthdays-in <days>`
pub fn in_days(ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
    let days: i64 = args[0]
        .parse()
        .map_err(|_| ValidationError::InvalidDayCount)?;
    Ok(listing(ws.contacts.get_birthdays_in_days(days)?))
}

fn listing(birthdays: Vec<UpcomingBirthday>) -> CmdResult {
    if birthdays.is_empty() {
        return CmdResult::message(CmdMessage::info("No upcoming birthdays."));
    }
    CmdResult::default().with_birthdays(birthdays)
}
