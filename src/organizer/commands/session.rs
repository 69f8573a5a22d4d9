use super::{CmdMessage, CmdResult, Workspace};
use crate::error::Result;

/// `hello`
pub fn hello(_ws: &mut Workspace, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::message(CmdMessage::info("How can I help you?")))
}

/// `help` / `show`
pub fn help(_ws: &mut Workspace, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult {
        show_help: true,
        ..CmdResult::default()
    })
}

/// `close` / `exit`
pub fn exit(_ws: &mut Workspace, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult {
        exit: true,
        ..CmdResult::message(CmdMessage::info("Good bye!"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_says_goodbye_and_sets_flag() {
        let mut ws = Workspace::default();
        let result = exit(&mut ws, &[]).unwrap();
        assert!(result.exit);
        assert_eq!(result.first_message(), Some("Good bye!"));
    }

    #[test]
    fn help_only_requests_the_listing() {
        let mut ws = Workspace::default();
        let result = help(&mut ws, &[]).unwrap();
        assert!(result.show_help);
        assert!(result.messages.is_empty());
        assert!(!result.exit);
    }
}
