use chrono::{Local, NaiveDate};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{Category, Expense, ExpenseDate, ExpenseDraft};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a title.")]
    TitleRequired,
    #[error("Amount must be a number of zero or more.")]
    InvalidAmount,
    #[error("Please choose a valid date.")]
    InvalidDate,
}

/// The raw input values, kept as typed until submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseFields {
    pub title: String,
    pub amount: String,
    pub category: Category,
    pub description: String,
    pub date: String,
}

impl ExpenseFields {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: Category::Food,
            description: String::new(),
            date: ExpenseDate(today).to_input_value(),
        }
    }

    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_string(),
            category: expense.category,
            description: expense.description.clone().unwrap_or_default(),
            date: expense.date.to_input_value(),
        }
    }

    pub fn to_draft(&self) -> Result<ExpenseDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or(FormError::InvalidAmount)?;

        let date = ExpenseDate::parse(&self.date).ok_or(FormError::InvalidDate)?;

        let description = self.description.trim();
        Ok(ExpenseDraft {
            title: title.to_owned(),
            amount,
            category: self.category,
            description: (!description.is_empty()).then(|| description.to_owned()),
            date,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// The expense being edited, or `None` when creating.
    pub expense: Option<Expense>,
    pub on_submit: Callback<ExpenseDraft>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let initial = props.expense.clone();
    let fields = use_state(move || match &initial {
        Some(expense) => ExpenseFields::from_expense(expense),
        None => ExpenseFields::blank(Local::now().date_naive()),
    });
    let error = use_state(|| None::<String>);

    let on_submit = {
        let fields = fields.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match fields.to_draft() {
                Ok(draft) => {
                    error.set(None);
                    on_submit.emit(draft);
                }
                Err(form_error) => error.set(Some(form_error.to_string())),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_text_input = |apply: fn(&mut ExpenseFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_description_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.description = input.value();
            fields.set(next);
        })
    };

    let on_category_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(category) = select.value().parse::<Category>() {
                let mut next = (*fields).clone();
                next.category = category;
                fields.set(next);
            }
        })
    };

    let heading = if props.expense.is_some() {
        "Edit Expense"
    } else {
        "Add New Expense"
    };
    let input_class = "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm text-[#173E63] border-none";

    html! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
            <form class="w-full max-w-lg bg-white rounded-2xl shadow-lg p-6 space-y-4" onsubmit={on_submit}>
                <h2 class="text-[#1D617A] font-bold text-lg">{ heading }</h2>
                <div class="grid grid-cols-2 gap-3">
                    <div class="space-y-1 col-span-2">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Title"}</label>
                        <input type="text" placeholder="What did you spend on?" value={fields.title.clone()}
                            oninput={on_text_input(|f, value| f.title = value)} class={input_class} />
                    </div>
                    <div class="space-y-1">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Amount ($)"}</label>
                        <input type="number" step="0.01" min="0" placeholder="0.00" value={fields.amount.clone()}
                            oninput={on_text_input(|f, value| f.amount = value)} class={input_class} />
                    </div>
                    <div class="space-y-1">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                        <select onchange={on_category_change} class={input_class}>
                            { for Category::ALL.iter().map(|category| html! {
                                <option value={category.as_str()} selected={*category == fields.category}>{ category.as_str() }</option>
                            }) }
                        </select>
                    </div>
                    <div class="space-y-1 col-span-2">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                        <input type="date" value={fields.date.clone()}
                            oninput={on_text_input(|f, value| f.date = value)} class={input_class} />
                    </div>
                    <div class="space-y-1 col-span-2">
                        <label class="text-[12px] font-bold text-muted-foreground">{"Description (optional)"}</label>
                        <textarea rows="3" value={fields.description.clone()} oninput={on_description_input} class={input_class}></textarea>
                    </div>
                </div>
                if let Some(msg) = &*error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }
                <div class="flex gap-3">
                    <button type="submit" class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-sm font-bold">
                        { if props.expense.is_some() { "Update Expense" } else { "Add Expense" } }
                    </button>
                    <button type="button" onclick={on_cancel} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-sm font-bold">{"Cancel"}</button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, amount: &str, date: &str) -> ExpenseFields {
        ExpenseFields {
            title: title.to_owned(),
            amount: amount.to_owned(),
            category: Category::Shopping,
            description: String::new(),
            date: date.to_owned(),
        }
    }

    #[test]
    fn valid_fields_become_a_draft() {
        let mut input = fields("  Shoes ", "79.90", "2024-04-02");
        input.description = "  running  ".to_owned();

        let draft = input.to_draft().unwrap();

        assert_eq!(draft.title, "Shoes");
        assert_eq!(draft.amount, 79.9);
        assert_eq!(draft.category, Category::Shopping);
        assert_eq!(draft.description.as_deref(), Some("running"));
        assert_eq!(draft.date.to_input_value(), "2024-04-02");
    }

    #[test]
    fn blank_description_is_omitted() {
        let draft = fields("Shoes", "10", "2024-04-02").to_draft().unwrap();

        assert_eq!(draft.description, None);
    }

    #[test]
    fn invalid_fields_are_reported_in_order() {
        assert_eq!(
            fields(" ", "abc", "nope").to_draft(),
            Err(FormError::TitleRequired)
        );
        assert_eq!(
            fields("Shoes", "abc", "2024-04-02").to_draft(),
            Err(FormError::InvalidAmount)
        );
        assert_eq!(
            fields("Shoes", "-5", "2024-04-02").to_draft(),
            Err(FormError::InvalidAmount)
        );
        assert_eq!(
            fields("Shoes", "NaN", "2024-04-02").to_draft(),
            Err(FormError::InvalidAmount)
        );
        assert_eq!(
            fields("Shoes", "5", "").to_draft(),
            Err(FormError::InvalidDate)
        );
    }

    #[test]
    fn editing_prefills_from_expense() {
        let expense = Expense {
            id: "1".to_owned(),
            title: "Coffee".to_owned(),
            amount: 4.5,
            category: Category::Food,
            description: Some("oat latte".to_owned()),
            date: ExpenseDate::parse("2024-01-01").unwrap(),
        };

        let prefilled = ExpenseFields::from_expense(&expense);

        assert_eq!(prefilled.amount, "4.5");
        assert_eq!(prefilled.description, "oat latte");
        assert_eq!(
            prefilled.to_draft().unwrap(),
            ExpenseDraft {
                title: "Coffee".to_owned(),
                amount: 4.5,
                category: Category::Food,
                description: Some("oat latte".to_owned()),
                date: expense.date,
            }
        );
    }

    #[test]
    fn blank_form_defaults_to_food_and_given_day() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();

        let blank = ExpenseFields::blank(today);

        assert_eq!(blank.category, Category::Food);
        assert_eq!(blank.date, "2024-05-17");
        assert_eq!(blank.to_draft(), Err(FormError::TitleRequired));
    }
}
