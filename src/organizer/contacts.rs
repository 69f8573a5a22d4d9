//! # Contact Store
//!
//! Owns every [`Contact`] keyed by its name and answers the birthday reminder
//! queries.
//!
//! ## Reminder algorithm
//!
//! For each contact with a birthday:
//!
//! 1. Move the birthday into the current year. If that date already passed,
//!    use next year's instead.
//! 2. Keep it only if it lies in `today..=today + n` (both ends inclusive).
//! 3. A birthday on Saturday is congratulated on the following Monday (+2),
//!    one on Sunday also on Monday (+1). Weekdays are never shifted.
//!
//! 29 February birthdays fall back to 28 February in non-leap years.

use crate::error::{OrganizerError, Result, ValidationError};
use crate::fields::{Address, Birthday, Email, Name, Phone};
use crate::model::Contact;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Window of the default `birthdays` reminder, in days.
pub const DEFAULT_REMINDER_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Next occurrence of the birthday, before any weekend shift.
    pub birthday: NaiveDate,
    pub congratulation_date: NaiveDate,
    pub days_until: i64,
}

impl UpcomingBirthday {
    pub fn congratulation_display(&self) -> String {
        self.congratulation_date.format("%Y.%m.%d").to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: BTreeMap<String, Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Creates the contact if needed, then appends the phone.
    ///
    /// The phone is validated before anything is inserted, so a bad phone
    /// never leaves a half-created contact behind.
    pub fn add(&mut self, name: &str, phone: Option<&str>) -> Result<AddOutcome> {
        let name = Name::parse(name)?;
        let phone = phone.map(Phone::parse).transpose()?;

        let outcome = if self.contacts.contains_key(name.as_str()) {
            AddOutcome::Updated
        } else {
            AddOutcome::Added
        };
        let contact = self
            .contacts
            .entry(name.as_str().to_string())
            .or_insert_with(|| Contact::new(name));
        if let Some(phone) = phone {
            contact.phones.push(phone);
        }
        tracing::debug!(contact = contact.name(), ?outcome, "contact saved");
        Ok(outcome)
    }

    /// Inserts a fully built contact, replacing any contact with the same name.
    pub fn insert(&mut self, contact: Contact) {
        self.contacts.insert(contact.name().to_string(), contact);
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn get(&self, name: &str) -> Result<&Contact> {
        self.find(name)
            .ok_or_else(|| OrganizerError::NotFound(format!("contact {name}")))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Contact> {
        self.contacts
            .get_mut(name)
            .ok_or_else(|| OrganizerError::NotFound(format!("contact {name}")))
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        self.contacts
            .remove(name)
            .ok_or_else(|| OrganizerError::NotFound(format!("contact {name}")))
    }

    /// Replaces `old` with `new` in place. `new` is validated before the lookup
    /// of `old`, so any failure leaves the phone list untouched.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<()> {
        let new = Phone::parse(new)?;
        let contact = self.get_mut(name)?;
        let pos = contact
            .find_phone(old)
            .ok_or_else(|| OrganizerError::NotFound(format!("phone {old}")))?;
        contact.phones[pos] = new;
        Ok(())
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        let phone = Phone::parse(phone)?;
        self.get_mut(name)?.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `phone`.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        let contact = self.get_mut(name)?;
        let pos = contact
            .find_phone(phone)
            .ok_or_else(|| OrganizerError::NotFound(format!("phone {phone}")))?;
        contact.phones.remove(pos);
        Ok(())
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<()> {
        let birthday = Birthday::parse(date)?;
        self.get_mut(name)?.birthday = Some(birthday);
        Ok(())
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<()> {
        let email = Email::parse(email)?;
        self.get_mut(name)?.email = Some(email);
        Ok(())
    }

    pub fn add_address(&mut self, name: &str, address: &str) -> Result<()> {
        let address = Address::parse(address)?;
        self.get_mut(name)?.address = Some(address);
        Ok(())
    }

    pub fn list_all(&self) -> Vec<&Contact> {
        self.contacts.values().collect()
    }

    /// Contacts whose name (case-insensitive) or any phone contains `keyword`.
    pub fn search(&self, keyword: &str) -> Vec<&Contact> {
        let needle = keyword.to_lowercase();
        self.contacts
            .values()
            .filter(|c| {
                c.name().to_lowercase().contains(&needle)
                    || c.phones.iter().any(|p| p.as_str().contains(keyword))
            })
            .collect()
    }

    /// Birthdays in the next [`DEFAULT_REMINDER_DAYS`] days, in store order.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(today())
    }

    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.birthdays_within(today, DEFAULT_REMINDER_DAYS)
    }

    /// Birthdays in the next `days` days, nearest first.
    pub fn get_birthdays_in_days(&self, days: i64) -> Result<Vec<UpcomingBirthday>> {
        self.birthdays_in_days_from(today(), days)
    }

    pub fn birthdays_in_days_from(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> Result<Vec<UpcomingBirthday>> {
        if days < 0 {
            return Err(ValidationError::InvalidDayCount.into());
        }
        let mut upcoming = self.birthdays_within(today, days);
        upcoming.sort_by_key(|b| b.days_until);
        Ok(upcoming)
    }

    fn birthdays_within(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        // Windows reaching past the calendar's end cover everything ahead.
        let window_end = Duration::try_days(days)
            .and_then(|span| today.checked_add_signed(span))
            .unwrap_or(NaiveDate::MAX);
        self.contacts
            .values()
            .filter_map(|contact| {
                let birthday = next_occurrence(contact.birthday?.date(), today);
                if birthday < today || birthday > window_end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: contact.name().to_string(),
                    birthday,
                    congratulation_date: congratulation_date(birthday),
                    days_until: (birthday - today).num_days(),
                })
            })
            .collect()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn in_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

/// The birthday moved into this year, or next year if it already passed.
pub fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = in_year(birth, today.year());
    if candidate < today {
        in_year(birth, today.year() + 1)
    } else {
        candidate
    }
}

/// Moves a weekend date onto the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
