use yew::prelude::*;
use yew_router::prelude::*;
use crate::catalog::{self, CatalogEntry, Selection};
use crate::Route;

#[derive(Properties, PartialEq)]
struct EntryCardProps {
    entry: CatalogEntry,
    selected: bool,
    compact: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(EntryCard)]
fn entry_card(props: &EntryCardProps) -> Html {
    let entry = props.entry;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(entry.name))
    };

    let class = if props.compact { "addon-card" } else { "pricing-card" };
    html! {
        <div class={class} onclick={onclick}>
            <input type="checkbox" checked={props.selected} readonly={true} />
            <div class="pricing-card-body">
                <h3>{entry.name}</h3>
                {
                    if props.compact {
                        html! {}
                    } else {
                        html! { <p>{entry.description}</p> }
                    }
                }
                <span class="price-tag">{catalog::format_price(entry.price_cents)}</span>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let selection = use_state(Selection::new);

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |name: &'static str| {
            let mut next = (*selection).clone();
            next.toggle(name);
            selection.set(next);
        })
    };

    let total = selection.total_cents();

    html! {
        <section class="pricing-page">
            <div class="section-heading">
                <h2>{"Small Aircraft Pricing"}</h2>
                <p>{"Select the services and add-ons you want to see your estimated total instantly."}</p>
            </div>

            <div class="pricing-grid">
                { for catalog::SERVICES.iter().map(|entry| html! {
                    <EntryCard
                        entry={*entry}
                        selected={selection.is_selected(entry.name)}
                        compact={false}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>

            <h3 class="addons-heading">{"Add-ons"}</h3>
            <div class="addon-grid">
                { for catalog::ADDONS.iter().map(|entry| html! {
                    <EntryCard
                        entry={*entry}
                        selected={selection.is_selected(entry.name)}
                        compact={true}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>

            <div class="pricing-total">
                {format!("Total: {}", catalog::format_price(total))}
            </div>

            <div class="pricing-actions">
                <Link<Route> to={Route::Quote} classes="cta-button">
                    {"Request a Quote"}
                </Link<Route>>
                <Link<Route> to={Route::Home} classes="back-link">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </section>
    }
}
