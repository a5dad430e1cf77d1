//! Card for one conservation action.

use leptos::prelude::*;

use super::delete_button::DeleteButton;
use crate::net::types::ConservationAction;
use crate::util::catalog::action_type_label;
use crate::util::format::{date_part, format_area, format_kg, format_score};

#[component]
pub fn ActionCard(
    action: ConservationAction,
    can_delete: bool,
    #[prop(into)] pending: Signal<bool>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let ConservationAction {
        id,
        action_type,
        title,
        description,
        location_name,
        participants,
        waste_collected,
        area_covered,
        date_completed,
        impact_score,
        user_name,
        ..
    } = action;

    view! {
        <article class="card card--action" class:card--pending=move || pending.get()>
            <header class="card__header">
                <div>
                    <h3 class="card__title">{title}</h3>
                    <span class="badge">{action_type_label(&action_type)}</span>
                </div>
                {can_delete.then(|| view! { <DeleteButton id=id title="Delete action" pending=pending on_delete=on_delete/> })}
            </header>
            {description.map(|d| view! { <blockquote class="card__note"><p>{d}</p></blockquote> })}
            {location_name.map(|name| view! { <p class="card__row">{name}</p> })}
            <dl class="card__facts">
                <div>
                    <dt>"Participants"</dt>
                    <dd>{participants}</dd>
                </div>
                {(waste_collected > 0.0).then(|| view! { <div><dt>"Waste"</dt><dd>{format_kg(waste_collected)}</dd></div> })}
                {(area_covered > 0.0).then(|| view! { <div><dt>"Area"</dt><dd>{format_area(area_covered)}</dd></div> })}
                {impact_score.map(|s| view! { <div><dt>"Impact"</dt><dd>{format_score(Some(s))}</dd></div> })}
            </dl>
            <footer class="card__footer">
                <span>{format!("Led by {}", user_name.unwrap_or_default())}</span>
                <span>{date_part(&date_completed).to_owned()}</span>
            </footer>
        </article>
    }
}
