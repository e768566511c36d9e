use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::RawContributionCalendar;

const CALENDAR_QUERY: &str = "\
query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}";

pub fn calendar_request(login: &str) -> Value {
    json!({
        "query": CALENDAR_QUERY,
        "variables": { "login": login },
    })
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CalendarData {
    pub user: Option<CalendarUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: WireCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCalendar {
    pub total_contributions: u32,
    pub weeks: Vec<WireWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireWeek {
    pub contribution_days: Vec<WireDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDay {
    pub contribution_count: u32,
    pub date: String,
}

impl WireCalendar {
    pub fn into_raw(self) -> RawContributionCalendar {
        RawContributionCalendar {
            total: self.total_contributions,
            weeks: self
                .weeks
                .into_iter()
                .map(|w| {
                    w.contribution_days
                        .into_iter()
                        .map(|d| d.contribution_count)
                        .collect()
                })
                .collect(),
        }
    }
}
