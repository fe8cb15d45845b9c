use crate::{date::parse_date, employee::Employee, reminder_list::ReminderList, shared::entity::ID};
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("The operator: `{0}` is not supported")]
    UnsupportedOperator(String),
    #[error("The field: `{0}` is not searchable")]
    UnsupportedField(String),
    #[error("The value: `{0}` is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Dates that are computed on read and never stored,
/// but which can still be searched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedDateField {
    NextOccurrence,
    RemindTrigger,
}

impl FromStr for DerivedDateField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next_occurrence" | "next_birthday_date" => Ok(Self::NextOccurrence),
            "remind_trigger" | "birthday_remind_date" => Ok(Self::RemindTrigger),
            _ => Err(SearchError::UnsupportedField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
}

impl CompareOperator {
    pub fn compare(&self, lhs: &NaiveDate, rhs: &NaiveDate) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Gt => lhs > rhs,
            Self::Gte => lhs >= rhs,
            Self::Lt => lhs < rhs,
            Self::Lte => lhs <= rhs,
            Self::Ne => lhs != rhs,
        }
    }
}

impl FromStr for CompareOperator {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Self::Eq),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Gte),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Lte),
            "!=" => Ok(Self::Ne),
            _ => Err(SearchError::UnsupportedOperator(s.to_string())),
        }
    }
}

/// A search value, either already a date or an ISO `YYYY-MM-DD` string
#[derive(Debug, Clone)]
pub enum DateValue {
    Date(NaiveDate),
    Iso(String),
}

impl DateValue {
    pub fn resolve(&self) -> Result<NaiveDate, SearchError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Iso(datestr) => {
                parse_date(datestr).ok_or_else(|| SearchError::InvalidDate(datestr.clone()))
            }
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateValue {
    fn from(datestr: &str) -> Self {
        Self::Iso(datestr.to_string())
    }
}

impl From<String> for DateValue {
    fn from(datestr: String) -> Self {
        Self::Iso(datestr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedDateQuery {
    pub field: DerivedDateField,
    pub operator: CompareOperator,
    pub value: NaiveDate,
}

impl DerivedDateQuery {
    pub fn new(field: DerivedDateField, operator: CompareOperator, value: NaiveDate) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    pub fn parse(
        field: &str,
        operator: &str,
        value: impl Into<DateValue>,
    ) -> Result<Self, SearchError> {
        let operator = operator.parse::<CompareOperator>()?;
        let field = field.parse::<DerivedDateField>()?;
        let value = value.into().resolve()?;
        Ok(Self::new(field, operator, value))
    }
}

/// Translates a comparison on a derived date into the list of matching `Employee` ids.
///
/// Only reminder enabled `Employee`s whose derived date is set can match. Each
/// candidate is paired with the `ReminderList`s its `Identity` is a recipient of.
pub fn filter_by_derived_date<'a, I>(
    candidates: I,
    query: &DerivedDateQuery,
    today: &NaiveDate,
) -> Vec<ID>
where
    I: IntoIterator<Item = (&'a Employee, &'a [ReminderList])>,
{
    candidates
        .into_iter()
        .filter(|(employee, _)| employee.remind_enabled)
        .filter_map(|(employee, memberships)| {
            employee
                .derived_date(query.field, today, memberships)
                .filter(|date| query.operator.compare(date, &query.value))
                .map(|_| employee.id.clone())
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;

    struct Candidate {
        employee: Employee,
        memberships: Vec<ReminderList>,
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn candidate(days_to_birthday: i64, lead_days: Option<u32>, enabled: bool) -> Candidate {
        let mut employee = Employee::new("Employee".into());
        employee.birthdate = Some(today() + Duration::days(days_to_birthday));
        employee.remind_enabled = enabled;
        employee.identity_id = Some(ID::default());
        let memberships = lead_days
            .map(|lead_days| {
                let mut list = ReminderList::new("List".into());
                list.lead_days = lead_days;
                vec![list]
            })
            .unwrap_or_default();
        Candidate {
            employee,
            memberships,
        }
    }

    fn pairs(candidates: &[Candidate]) -> Vec<(&Employee, &[ReminderList])> {
        candidates
            .iter()
            .map(|c| (&c.employee, c.memberships.as_slice()))
            .collect()
    }

    #[test]
    fn parses_supported_operators() {
        for (op, expected) in [
            ("=", CompareOperator::Eq),
            (">", CompareOperator::Gt),
            (">=", CompareOperator::Gte),
            ("<", CompareOperator::Lt),
            ("<=", CompareOperator::Lte),
            ("!=", CompareOperator::Ne),
        ] {
            assert_eq!(op.parse::<CompareOperator>(), Ok(expected));
        }
    }

    #[test]
    fn rejects_unsupported_operator() {
        let res = DerivedDateQuery::parse("next_occurrence", "contains", today());
        assert_eq!(
            res,
            Err(SearchError::UnsupportedOperator("contains".into()))
        );
    }

    #[test]
    fn rejects_malformed_date_string() {
        let res = DerivedDateQuery::parse("next_occurrence", "=", "2026-13-01");
        assert_eq!(res, Err(SearchError::InvalidDate("2026-13-01".into())));
        let res = DerivedDateQuery::parse("birthday", "=", "2026-10-01");
        assert_eq!(res, Err(SearchError::UnsupportedField("birthday".into())));
    }

    #[test]
    fn equality_matches_exactly_the_enabled_employees() {
        let candidates = vec![
            candidate(10, Some(5), true),
            candidate(10, Some(5), false),
            candidate(11, Some(5), true),
        ];
        let query = DerivedDateQuery::new(
            DerivedDateField::NextOccurrence,
            CompareOperator::Eq,
            today() + Duration::days(10),
        );
        let ids = filter_by_derived_date(pairs(&candidates), &query, &today());
        assert_eq!(ids, vec![candidates[0].employee.id.clone()]);

        let query = DerivedDateQuery::new(
            DerivedDateField::NextOccurrence,
            CompareOperator::Eq,
            today() + Duration::days(30),
        );
        let ids = filter_by_derived_date(pairs(&candidates), &query, &today());
        assert!(ids.is_empty());
    }

    #[test]
    fn accepts_iso_string_values() {
        let candidates = vec![candidate(10, Some(5), true)];
        let query = DerivedDateQuery::parse("remind_trigger", "=", "2026-10-23").unwrap();
        let ids = filter_by_derived_date(pairs(&candidates), &query, &today());
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn employees_without_derived_date_never_match() {
        let mut no_birthday = candidate(10, Some(5), true);
        no_birthday.employee.birthdate = None;
        let candidates = vec![no_birthday, candidate(10, None, true)];

        // Even `!=` does not match a missing date
        let query = DerivedDateQuery::new(
            DerivedDateField::RemindTrigger,
            CompareOperator::Ne,
            today(),
        );
        assert!(filter_by_derived_date(pairs(&candidates), &query, &today()).is_empty());

        let query = DerivedDateQuery::new(
            DerivedDateField::NextOccurrence,
            CompareOperator::Ne,
            today(),
        );
        assert_eq!(
            filter_by_derived_date(pairs(&candidates), &query, &today()),
            vec![candidates[1].employee.id.clone()]
        );
    }

    #[test]
    fn comparators_on_remind_trigger() {
        // Remind dates: today + 1, today + 5, today + 9
        let candidates = vec![
            candidate(2, Some(1), true),
            candidate(10, Some(5), true),
            candidate(12, Some(3), true),
        ];
        let value = today() + Duration::days(5);
        let count = |op: CompareOperator| {
            let query = DerivedDateQuery::new(DerivedDateField::RemindTrigger, op, value);
            filter_by_derived_date(pairs(&candidates), &query, &today()).len()
        };
        assert_eq!(count(CompareOperator::Eq), 1);
        assert_eq!(count(CompareOperator::Gt), 1);
        assert_eq!(count(CompareOperator::Gte), 2);
        assert_eq!(count(CompareOperator::Lt), 1);
        assert_eq!(count(CompareOperator::Lte), 2);
        assert_eq!(count(CompareOperator::Ne), 2);
    }
}
