//! Trip Budget Page

use leptos::prelude::*;
use travana_core::summary::{self, format_amount};

use super::{use_trip_id, use_trip_overview};
use crate::components::TripTabs;

const TOP_EXPENSES: usize = 5;

#[component]
pub fn BudgetPage() -> impl IntoView {
    let trip_id = use_trip_id();
    let overview = use_trip_overview(trip_id);

    move || {
        overview.get().map(|overview| {
            let budget = summary::budget(&overview.expenses, TOP_EXPENSES);
            let categories: Vec<_> = budget
                .by_category
                .iter()
                .map(|(category, amount)| (*category, *amount, budget.percent(*category)))
                .collect();

            view! {
                <section class="trip-budget">
                    <header class="page-header">
                        <h1>{overview.trip.title.clone()}" · Budget"</h1>
                    </header>
                    <TripTabs trip_id=overview.trip.id.clone() />

                    <div class="budget-total">
                        <span>"Total spent"</span>
                        <strong>{format_amount(budget.total)}</strong>
                    </div>

                    <Show
                        when=move || !overview.expenses.is_empty()
                        fallback=|| view! { <p class="empty-state">"No expenses recorded yet."</p> }
                    >
                        <div class="budget-breakdown">
                            <h2>"By category"</h2>
                            <div class="budget-bar">
                                {categories.iter().map(|(category, _, percent)| view! {
                                    <span
                                        class="budget-bar-segment"
                                        style:width=format!("{:.1}%", percent)
                                        style:background-color=category.color()
                                        title=category.as_str()
                                    ></span>
                                }).collect_view()}
                            </div>
                            <ul class="budget-legend">
                                {categories.iter().map(|(category, amount, percent)| view! {
                                    <li>
                                        <span class="legend-swatch" style:background-color=category.color()></span>
                                        <span class="legend-label">{category.as_str()}</span>
                                        <span class="legend-amount">{format_amount(*amount)}</span>
                                        <span class="legend-percent">{format!("{:.0}%", percent)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>

                        <div class="top-expenses">
                            <h2>"Top expenses"</h2>
                            <ul>
                                {budget.top_expenses.iter().map(|expense| view! {
                                    <li>
                                        <span class="expense-title">{expense.title.clone()}</span>
                                        <span class="expense-category">{expense.category.as_str()}</span>
                                        {expense.generated_by_ai.then(|| view! { <span class="badge">"AI"</span> })}
                                        <span class="expense-amount">{format_amount(expense.amount)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </Show>
                </section>
            }
        })
    }
}
