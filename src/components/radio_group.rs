//! One labelled radio group per `Choice` type.

use leptos::prelude::*;

use crate::state::preference::Choice;

/// Radio inputs for every member of `T`, named after `T::GROUP`.
///
/// `selected` drives the checked state; `on_pick` runs after a new value is
/// chosen.
#[component]
pub fn RadioGroup<T, F>(heading: &'static str, selected: RwSignal<T>, on_pick: F) -> impl IntoView
where
    T: Choice,
    F: Fn(T) + Clone + 'static,
{
    let options = T::ALL
        .iter()
        .copied()
        .map(|value| {
            let on_pick = on_pick.clone();
            view! {
                <label class="switch-container">
                    <input
                        type="radio"
                        name={T::GROUP}
                        value={value.as_str()}
                        id={format!("{}-{}", T::GROUP, value.as_str())}
                        prop:checked=move || selected.get() == value
                        on:change=move |_| {
                            selected.set(value);
                            on_pick(value);
                        }
                    />
                    <span class="switch-label">{value.label()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <h3>{heading}</h3>
        <div class="theme-switches">{options}</div>
    }
}
