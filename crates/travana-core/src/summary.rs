//! Derived views over trip data (budget, activity lists, progress)

use chrono::{DateTime, FixedOffset, Timelike};
use std::cmp::Ordering;

use crate::category::{ActivityCategory, ExpenseCategory};
use crate::models::{Activity, ChecklistItem, Expense, TripDates, WishlistItem};

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total: f64,
    /// Per-category totals in first-seen order
    pub by_category: Vec<(ExpenseCategory, f64)>,
    pub top_expenses: Vec<Expense>,
}

impl BudgetSummary {
    /// Share of `category` in the total, 0..=100
    pub fn percent(&self, category: ExpenseCategory) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0.0, |(_, amount)| amount / self.total * 100.0)
    }
}

pub fn budget(expenses: &[Expense], top: usize) -> BudgetSummary {
    let mut by_category: Vec<(ExpenseCategory, f64)> = Vec::new();
    for expense in expenses {
        match by_category.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, amount)) => *amount += expense.amount,
            None => by_category.push((expense.category, expense.amount)),
        }
    }

    let mut top_expenses = expenses.to_vec();
    top_expenses.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    top_expenses.truncate(top);

    BudgetSummary {
        total: expenses.iter().map(|e| e.amount).sum(),
        by_category,
        top_expenses,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivitySort {
    #[default]
    DateAsc,
    DateDesc,
    /// Time of day, ignoring the date
    TimeAsc,
    TimeDesc,
}

impl ActivitySort {
    pub const ALL: [ActivitySort; 4] = [
        ActivitySort::DateAsc,
        ActivitySort::DateDesc,
        ActivitySort::TimeAsc,
        ActivitySort::TimeDesc,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ActivitySort::DateAsc => "date-asc",
            ActivitySort::DateDesc => "date-desc",
            ActivitySort::TimeAsc => "time-asc",
            ActivitySort::TimeDesc => "time-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivitySort::DateAsc => "Sort by Date (Asc)",
            ActivitySort::DateDesc => "Sort by Date (Desc)",
            ActivitySort::TimeAsc => "Sort by Time (Asc)",
            ActivitySort::TimeDesc => "Sort by Time (Desc)",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .unwrap_or_default()
    }
}

fn seconds_of_day(at: &DateTime<FixedOffset>) -> u32 {
    at.num_seconds_from_midnight()
}

/// Filter by category (`None` = all) and sort. Unscheduled activities go last.
pub fn arrange_activities(
    activities: &[Activity],
    category: Option<ActivityCategory>,
    sort: ActivitySort,
) -> Vec<Activity> {
    let mut keyed: Vec<(Option<DateTime<FixedOffset>>, Activity)> = activities
        .iter()
        .filter(|a| category.map_or(true, |c| a.category == c))
        .map(|a| (a.scheduled_at(), a.clone()))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match sort {
            ActivitySort::DateAsc => a.cmp(b),
            ActivitySort::DateDesc => b.cmp(a),
            ActivitySort::TimeAsc => seconds_of_day(a).cmp(&seconds_of_day(b)),
            ActivitySort::TimeDesc => seconds_of_day(b).cmp(&seconds_of_day(a)),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().map(|(_, a)| a).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.done * 100 / self.total) as u32
        }
    }
}

pub fn checklist_progress(items: &[ChecklistItem]) -> Progress {
    Progress {
        done: items.iter().filter(|i| i.completed).count(),
        total: items.len(),
    }
}

pub fn wishlist_progress(items: &[WishlistItem]) -> Progress {
    Progress {
        done: items.iter().filter(|i| i.visited).count(),
        total: items.len(),
    }
}

pub fn duration_label(dates: TripDates) -> String {
    match dates.days() {
        None => "Unplanned".to_string(),
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{} days", days),
    }
}

/// Rupee amount with thousands separators and at most two decimals
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match cents % 100 {
        0 => format!("{}₹{}", sign, grouped),
        rest if rest % 10 == 0 => format!("{}₹{}.{}", sign, grouped, rest / 10),
        rest => format!("{}₹{}.{:02}", sign, grouped, rest),
    }
}
