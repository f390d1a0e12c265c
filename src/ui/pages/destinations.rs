//! Destinations page: filter bar, search, sorting and favorites
//!
//! Cards are rendered once in catalog order. Filtering hides them with a
//! short per-card fade delay and sorting only changes their CSS `order`, so
//! the reveal keys stay attached to the same elements.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::core::catalog::{
    ALL, Destination, DestinationFilter, SortOrder, countries_for_region,
};
use crate::core::favorites::{ClickCounter, FavoriteToggle, FavoritesStore};
use crate::core::navigation::NavPage;
use crate::core::timing::Debounce;
use crate::ui::config::use_site_config;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageHeader;
use crate::ui::notifications::use_notifications;
use crate::ui::reveal::use_scroll_reveal;
use crate::ui::scroll::use_page_analytics;
use crate::ui::storage::LocalStore;

const FACETS: [&str; 4] = ["region", "country", "setting", "season"];

fn destination(
    name: &str,
    region: &str,
    country: &str,
    setting: &str,
    season: &str,
    description: &str,
    tags: &[&str],
) -> Destination {
    Destination {
        name: name.to_string(),
        region: region.to_string(),
        country: country.to_string(),
        setting: setting.to_string(),
        season: season.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn catalog() -> Vec<Destination> {
    vec![
        destination("Amalfi Coast", "europe", "italy", "beach", "summer",
            "Cliffside villages, lemon groves and long lunches above the sea.", &["Romance", "Food", "Coast"]),
        destination("Kyoto", "asia", "japan", "city", "spring",
            "Temples, tea houses and cherry blossoms along the Philosopher's Path.", &["Culture", "History"]),
        destination("Phuket", "asia", "thailand", "beach", "winter",
            "Turquoise bays, island hopping and night markets.", &["Beach", "Islands"]),
        destination("Santorini", "europe", "greece", "beach", "summer",
            "White villages, volcanic beaches and famous sunsets.", &["Romance", "Islands"]),
        destination("Machu Picchu", "americas", "peru", "mountain", "fall",
            "The lost city of the Incas, high in the Andes.", &["Adventure", "History", "Hiking"]),
        destination("Cairo & the Nile", "africa", "egypt", "city", "winter",
            "Pyramids at Giza and a river cruise past ancient temples.", &["History", "Cruise"]),
        destination("Great Barrier Reef", "oceania", "australia", "beach", "spring",
            "Snorkel and dive the world's largest coral reef.", &["Adventure", "Diving"]),
        destination("Reykjavik", "europe", "iceland", "mountain", "winter",
            "Northern lights, geysers and geothermal lagoons.", &["Adventure", "Nature"]),
    ]
}

fn label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn encode(value: &str) -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::encode_uri_component(value))
    }
    #[cfg(not(feature = "csr"))]
    {
        value.to_string()
    }
}

/// Whether `name` is in the favorites list; `Copy`, so a card can read it twice
fn favorite_state(favorites: RwSignal<Vec<String>>, name: String) -> Signal<bool> {
    Signal::derive(move || favorites.with(|f| f.contains(&name)))
}

fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

#[component]
fn FilterSelect(
    name: &'static str,
    label_text: &'static str,
    value: Signal<Option<String>>,
    options: Signal<Vec<&'static str>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-group">
            <label for=name>{label_text}</label>
            <select
                id=name
                class="filter-select"
                prop:value=move || value.get().unwrap_or_else(|| ALL.to_string())
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=ALL>"All"</option>
                {move || options.get().into_iter().map(|opt| view! {
                    <option value=opt>{label(opt)}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn DestinationsPage() -> impl IntoView {
    use_scroll_reveal();
    use_page_analytics(NavPage::Destinations);

    let config = use_site_config();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let query = use_query_map();

    let destinations = StoredValue::new(catalog());
    let filter = RwSignal::new(query.with_untracked(|q| {
        let pairs: Vec<(&str, String)> = FACETS
            .iter()
            .filter_map(|name| q.get(name).map(|v| (*name, v)))
            .collect();
        DestinationFilter::from_query_pairs(pairs.iter().map(|(n, v)| (*n, v.as_str())))
    }));
    let sort = RwSignal::new(SortOrder::default());
    let search_input = RwSignal::new(String::new());
    let search_term = RwSignal::new(String::new());
    let debounce = StoredValue::new(Debounce::new(config.timing.input_debounce_ms));
    let favorites = RwSignal::new(FavoritesStore::destinations(LocalStore::open()).list());

    // keep the address bar in sync so filtered views can be shared
    Effect::new(move |prev: Option<()>| {
        let query = filter.with(|f| {
            f.to_query_pairs()
                .into_iter()
                .map(|(name, value)| format!("{name}={}", encode(&value)))
                .collect::<Vec<_>>()
                .join("&")
        });
        if prev.is_some() {
            let url = if query.is_empty() {
                "/destinations".to_string()
            } else {
                format!("/destinations?{query}")
            };
            navigate(
                &url,
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        }
    });

    let outcome = Memo::new(move |_| filter.with(|f| destinations.with_value(|d| f.apply(d))));
    let search_hits = Memo::new(move |_| {
        let term = search_term.get();
        destinations.with_value(|d| d.iter().map(|dest| dest.matches_search(&term)).collect::<Vec<_>>())
    });
    let positions = Memo::new(move |_| {
        let order = destinations.with_value(|d| sort.get().sort(d));
        let mut positions = vec![0; order.len()];
        for (position, index) in order.into_iter().enumerate() {
            positions[index] = position;
        }
        positions
    });
    let nothing_visible = Memo::new(move |_| {
        let outcome = outcome.get();
        let hits = search_hits.get();
        !outcome.visible.iter().any(|(i, _)| hits.get(*i).copied().unwrap_or(false))
    });

    let on_search = move |value: String| {
        search_input.set(value);
        let now = now_ms();
        debounce.update_value(|d| d.touch(now));

        #[cfg(feature = "csr")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let wait = debounce.with_value(|d| d.wait_ms()).max(0.0) as u32;
            spawn_local(async move {
                TimeoutFuture::new(wait).await;
                let Some(ready) = debounce.try_update_value(|d| d.poll(now_ms())) else {
                    return;
                };
                if ready {
                    let _ = search_term.try_set(search_input.get_untracked());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            debounce.update_value(|d| d.cancel());
            search_term.set(search_input.get_untracked());
        }
    };

    let toggle_favorite = move |name: String| {
        let store = FavoritesStore::destinations(LocalStore::open());
        match store.toggle(&name) {
            Ok(outcome) => {
                favorites.set(store.list());
                match outcome {
                    FavoriteToggle::Added => notifications.success(outcome.message()),
                    FavoriteToggle::Removed => notifications.info(outcome.message()),
                }
            }
            Err(e) => {
                leptos::logging::warn!("could not save favorite: {}", e);
                notifications.error("Could not save your favorites in this browser");
            }
        }
    };

    let explore = move |name: String| {
        if let Err(e) = ClickCounter::card_interactions(LocalStore::open()).record(&name) {
            leptos::logging::warn!("could not record card interaction: {}", e);
        }
        notifications.info(format!("Contact us to start planning your trip to {name}!"));
    };

    let reset = move |_| {
        filter.set(DestinationFilter::new());
        sort.set(SortOrder::default());
        search_input.set(String::new());
        search_term.set(String::new());
    };

    let cards = destinations.with_value(|d| d.clone()).into_iter().enumerate().map(|(index, dest)| {
        let name = dest.name.clone();
        let visible = move || {
            outcome.with(|o| o.is_visible(index))
                && search_hits.with(|h| h.get(index).copied().unwrap_or(false))
        };
        let delay = move || {
            outcome.with(|o| {
                o.visible.iter().find(|(i, _)| *i == index).map(|(_, d)| *d).unwrap_or(0)
            })
        };
        let is_favorite = favorite_state(favorites, name.clone());
        let favorite_name = name.clone();
        let explore_name = name.clone();

        view! {
            <div
                class="destination-card"
                class:filtered-out=move || !visible()
                data-reveal=""
                data-region=dest.region.clone()
                data-country=dest.country.clone()
                data-setting=dest.setting.clone()
                data-season=dest.season.clone()
                style=move || format!(
                    "order: {}; transition-delay: {}ms",
                    positions.with(|p| p.get(index).copied().unwrap_or(index)),
                    delay()
                )
            >
                <div class="card-image">
                    <button
                        class="favorite-btn"
                        class:favorited=is_favorite
                        aria-label="Add to favorites"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            toggle_favorite(favorite_name.clone());
                        }
                    >
                        {move || if is_favorite.get() {
                            view! { <Icon name=icons::HEART_FILLED /> }
                        } else {
                            view! { <Icon name=icons::HEART /> }
                        }}
                    </button>
                </div>
                <div class="card-content">
                    <h3>{dest.name.clone()}</h3>
                    <p>{dest.description.clone()}</p>
                    <div class="card-tags">
                        {dest.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                    </div>
                    <button class="btn btn-outline explore-btn" on:click=move |_| explore(explore_name.clone())>
                        "Explore"
                    </button>
                </div>
            </div>
        }
    }).collect_view();

    let facet = move |name: &'static str| {
        Signal::derive(move || {
            filter.with(|f| match name {
                "region" => f.region.clone(),
                "country" => f.country.clone(),
                "setting" => f.setting.clone(),
                _ => f.season.clone(),
            })
        })
    };
    let set_facet = move |name: &'static str| {
        Callback::new(move |value: String| {
            filter.update(|f| {
                if name == "region" {
                    f.select_region(&value);
                } else {
                    f.set(name, &value);
                }
            });
        })
    };

    view! {
        <Title text="Destinations | Epic Adventures by Jen" />
        <PageHeader title="Destinations" subtitle="Find the trip that fits you" />

        <section class="filters">
            <div class="container filter-container">
                <div class="filter-group">
                    <label for="destination-search">"Search"</label>
                    <input
                        id="destination-search"
                        class="destination-search"
                        type="text"
                        placeholder="Search destinations..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| on_search(event_target_value(&ev))
                    />
                </div>
                <FilterSelect
                    name="region" label_text="Region"
                    value=facet("region")
                    options=Signal::derive(|| vec!["europe", "asia", "americas", "africa", "oceania"])
                    on_change=set_facet("region")
                />
                <FilterSelect
                    name="country" label_text="Country"
                    value=facet("country")
                    options=Signal::derive(move || {
                        filter.with(|f| countries_for_region(f.region.as_deref()).to_vec())
                    })
                    on_change=set_facet("country")
                />
                <FilterSelect
                    name="setting" label_text="Setting"
                    value=facet("setting")
                    options=Signal::derive(|| vec!["beach", "city", "mountain"])
                    on_change=set_facet("setting")
                />
                <FilterSelect
                    name="season" label_text="Season"
                    value=facet("season")
                    options=Signal::derive(|| vec!["spring", "summer", "fall", "winter"])
                    on_change=set_facet("season")
                />
                <div class="filter-group">
                    <label for="sort">"Sort By"</label>
                    <select
                        id="sort"
                        class="filter-select"
                        prop:value=move || sort.get().as_str()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            sort.set(value.parse().unwrap_or_default());
                        }
                    >
                        {SortOrder::all().into_iter().map(|order| view! {
                            <option value=order.as_str()>{order.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button class="btn btn-outline" on:click=reset>"Reset"</button>
            </div>
        </section>

        <section class="destinations">
            <div class="container destinations-grid" data-reveal-stagger="100">
                {cards}
            </div>
            <Show when=move || nothing_visible.get()>
                <div class="no-results">
                    <h3>"No destinations found"</h3>
                    <p>"Try adjusting your filters or search term."</p>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_favorite_state_follows_the_list() {
        Owner::new().with(|| {
            let favorites = RwSignal::new(vec!["Kyoto".to_string()]);
            let kyoto = favorite_state(favorites, "Kyoto".to_string());
            let phuket = favorite_state(favorites, "Phuket".to_string());

            assert!(kyoto.get());
            assert!(!phuket.get());

            favorites.update(|f| f.push("Phuket".to_string()));
            favorites.update(|f| f.retain(|n| n != "Kyoto"));
            assert!(phuket.get());
            assert!(!kyoto.get());
        });
    }

    #[test]
    fn test_catalog_names_are_unique_favorite_keys() {
        let destinations = catalog();
        let mut names: Vec<&str> = destinations.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), destinations.len());
    }

    #[test]
    fn test_label_capitalizes_facet_values() {
        assert_eq!(label("europe"), "Europe");
        assert_eq!(label(""), "");
    }
}
