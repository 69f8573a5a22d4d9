use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use organizer::commands::{CmdMessage, CmdResult, MessageLevel};
use organizer::contacts::UpcomingBirthday;
use organizer::model::{Contact, Note};
use organizer::registry::CommandRegistry;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const NAME_WIDTH: usize = 16;

pub(crate) fn print_result(result: &CmdResult, registry: &CommandRegistry) {
    print_contacts(&result.contacts);
    print_birthdays(&result.birthdays);
    print_notes(&result.notes);
    print_messages(&result.messages);
    if result.show_help {
        print_help(registry);
    }
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_help(registry: &CommandRegistry) {
    println!("Available commands:");
    let width = registry
        .commands()
        .iter()
        .map(|c| c.usage.width())
        .max()
        .unwrap_or(0);
    for spec in registry.commands() {
        let padding = width.saturating_sub(spec.usage.width());
        let aliases = if spec.aliases.is_empty() {
            String::new()
        } else {
            format!(" (also: {})", spec.aliases.join(", "))
        };
        println!(
            "  {}{}  {}{}",
            spec.usage.bold(),
            " ".repeat(padding),
            spec.summary,
            aliases.dimmed()
        );
    }
}

fn print_contacts(contacts: &[Contact]) {
    for contact in contacts {
        let name = pad_to_width(contact.name(), NAME_WIDTH);
        let phones = if contact.phones.is_empty() {
            "no phones".dimmed().to_string()
        } else {
            contact.phones_display()
        };
        let extras: Vec<String> = contact
            .extra_fields()
            .iter()
            .map(|f| format!("{}: {}", f.label(), f.format()))
            .collect();
        if extras.is_empty() {
            println!("{} {}", name.bold(), phones);
        } else {
            println!("{} {}  {}", name.bold(), phones, extras.join(", ").dimmed());
        }
    }
}

fn print_birthdays(birthdays: &[UpcomingBirthday]) {
    for b in birthdays {
        let name = pad_to_width(&b.name, NAME_WIDTH);
        let when = match b.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        println!(
            "{} - {} {}",
            name.bold(),
            b.congratulation_display().yellow(),
            format!("({})", when).dimmed()
        );
    }
}

fn print_notes(notes: &[Note]) {
    for note in notes {
        let id = format!("{}: ", note.id);
        let tags = if note.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", note.tags.join(", "))
        };
        let time_ago = format_time_ago(note.created);

        let fixed = id.width() + tags.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let text: String = note
            .text
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let text = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text.width());

        println!(
            "{}{}{}{}{}",
            id.yellow(),
            text,
            tags.cyan(),
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let s = truncate_to_width(s, width);
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(created: NaiveDateTime) -> String {
    let duration = Local::now().naive_local().signed_duration_since(created);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
