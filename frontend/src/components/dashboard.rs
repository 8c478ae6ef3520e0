use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    auth::AuthContext,
    config::AppConfig,
    dashboard::{controller, format_currency, CategoryFilter, DashboardAction, DashboardState},
    dialogs::BrowserDialogs,
    http::ApiClient,
    models::{Category, Expense, ExpenseDraft},
};

use super::{
    expense_form::ExpenseForm,
    icons::{icon_credit_card, icon_list, icon_log_out, icon_pencil, icon_plus, icon_trash},
};

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    CreditCard,
    List,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ props.value.clone() }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::List => icon_list(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseCardProps {
    expense: Expense,
    on_edit: Callback<Expense>,
    on_delete: Callback<String>,
}

#[function_component(ExpenseCard)]
fn expense_card(props: &ExpenseCardProps) -> Html {
    let expense = &props.expense;
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let expense = expense.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = expense.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-border flex justify-between items-start gap-4">
            <div class="space-y-1">
                <h3 class="font-bold text-[#173E63]">{ expense.title.clone() }</h3>
                <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ expense.category.as_str() }</span>
                if let Some(description) = expense.shown_description() {
                    <p class="text-sm text-slate-500">{ description.to_owned() }</p>
                }
                <p class="text-xs text-muted-foreground">{ expense.date.to_display() }</p>
            </div>
            <div class="flex items-center gap-3">
                <span class="text-lg font-semibold text-foreground">{ format_currency(expense.amount) }</span>
                <button onclick={on_edit} class="p-2 rounded-lg hover:bg-slate-100" aria-label="Edit">{ icon_pencil() }</button>
                <button onclick={on_delete} class="p-2 rounded-lg hover:bg-red-50 text-red-500" aria-label="Delete">{ icon_trash() }</button>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_context::<AuthContext>();
    let state = use_reducer(DashboardState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let client = ApiClient::browser(AppConfig::from_build_env());
                    state.dispatch(controller::fetch_expenses(&client).await);
                });
                || ()
            },
            (),
        );
    }

    let on_submit = {
        let state = state.clone();
        Callback::from(move |draft: ExpenseDraft| {
            let state = state.clone();
            let editing = state.editing().cloned();
            spawn_local(async move {
                let client = ApiClient::browser(AppConfig::from_build_env());
                let dispatch = |action: DashboardAction| state.dispatch(action);
                controller::save_expense(
                    &client,
                    &BrowserDialogs,
                    editing.as_ref(),
                    &draft,
                    &dispatch,
                )
                .await;
            });
        })
    };

    let on_delete = {
        let state = state.clone();
        Callback::from(move |id: String| {
            let state = state.clone();
            spawn_local(async move {
                let client = ApiClient::browser(AppConfig::from_build_env());
                let dispatch = |action: DashboardAction| state.dispatch(action);
                controller::delete_expense(&client, &BrowserDialogs, &id, &dispatch).await;
            });
        })
    };

    let on_edit = {
        let state = state.clone();
        Callback::from(move |expense: Expense| state.dispatch(DashboardAction::OpenEdit(expense)))
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(DashboardAction::OpenCreate))
    };

    let on_cancel = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(DashboardAction::CloseForm))
    };

    let on_filter = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetFilter(CategoryFilter::from_value(
                &select.value(),
            )));
        })
    };

    let (user_name, logout) = match &auth {
        Some(auth) => (
            auth.user.as_ref().map(|user| user.name.clone()).unwrap_or_default(),
            auth.logout.clone(),
        ),
        None => (String::new(), Callback::noop()),
    };
    let on_logout = Callback::from(move |_: MouseEvent| logout.emit(()));

    if state.loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Loading..."}
            </div>
        };
    }

    let visible = state.visible_expenses();
    let summary = state.summary();

    html! {
        <div class="min-h-screen bg-background p-6 space-y-6">
            <header class="bg-[#D8E1E8] rounded-[10px] px-6 py-4 flex items-center justify-between">
                <div>
                    <h1 class="text-[#173E63] text-2xl font-black tracking-tight">{"Expense Tracker"}</h1>
                    <p class="text-sm text-slate-600">{ format!("Welcome, {}!", user_name) }</p>
                </div>
                <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 rounded-xl bg-[#173E63] text-white text-[13px] font-medium">
                    { icon_log_out() }
                    <span>{"Logout"}</span>
                </button>
            </header>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <StatCard title="Total Expenses" value={summary.formatted_total()} icon={StatIcon::CreditCard} />
                <StatCard title="Total Count" value={summary.count.to_string()} icon={StatIcon::List} />
            </div>

            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <label class="text-[12px] font-bold text-muted-foreground">{"Filter by Category:"}</label>
                    <select onchange={on_filter} class="bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm text-[#173E63] border-none">
                        <option value={CategoryFilter::ALL_VALUE} selected={state.filter == CategoryFilter::All}>{"All Categories"}</option>
                        { for Category::ALL.iter().map(|category| html! {
                            <option value={category.as_str()} selected={state.filter == CategoryFilter::Only(*category)}>{ category.as_str() }</option>
                        }) }
                    </select>
                </div>
                <button onclick={on_add} class="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-sm font-bold">
                    { icon_plus() }
                    <span>{"Add Expense"}</span>
                </button>
            </div>

            <div class="space-y-3">
                if visible.is_empty() {
                    <div class="bg-card rounded-2xl border border-border p-8 text-center text-muted-foreground">
                        <p>{"No expenses found. Add your first expense!"}</p>
                    </div>
                } else {
                    { for visible.iter().map(|expense| html! {
                        <ExpenseCard
                            key={expense.id.clone()}
                            expense={(*expense).clone()}
                            on_edit={on_edit.clone()}
                            on_delete={on_delete.clone()}
                        />
                    }) }
                }
            </div>

            if state.is_form_visible() {
                <ExpenseForm
                    key={state.editing().map(|expense| expense.id.clone()).unwrap_or_else(|| "new".to_owned())}
                    expense={state.editing().cloned()}
                    on_submit={on_submit}
                    on_cancel={on_cancel}
                />
            }
        </div>
    }
}
