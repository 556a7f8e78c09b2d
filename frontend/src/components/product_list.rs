use crate::components::status::{ErrorAlert, LoadingIndicator, spawn_load};
use crate::session::use_session;
use crate::web::router::Link;
use leptos::prelude::*;
use storefront::{Generation, ViewState};
use storefront_shared::{Product, ProductListPage};

/// 商品列表页，挂载时加载一次
#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(ViewState::<ProductListPage>::Idle);
    let generation = Generation::new();

    let api = session.api();
    spawn_load(state, &generation, async move { api.fetch_products().await });
    on_cleanup(move || generation.invalidate());

    move || match state.get() {
        ViewState::Idle | ViewState::Loading => view! { <LoadingIndicator /> }.into_any(),
        ViewState::Failed(error) => view! { <ErrorAlert error=error /> }.into_any(),
        ViewState::Ready(page) => view! {
            <div class="container mx-auto p-8">
                <h1 class="text-3xl font-bold mb-6">"Product List"</h1>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {page
                        .products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let path = product.detail_path();

    view! {
        <div class="card bg-base-100 shadow-xl h-full">
            <Link to=path>
                <figure class="h-52 bg-white">
                    <img
                        src=product.thumbnail.clone()
                        alt=product.title.clone()
                        class="h-full object-contain"
                    />
                </figure>
                <div class="card-body p-4">
                    <h2 class="card-title">{product.title}</h2>
                    <p class="text-sm text-base-content/70">{product.description}</p>
                    <p class="mt-2">
                        <span class="font-semibold">"Price:"</span>
                        {format!(" ${}", product.price)}
                    </p>
                </div>
            </Link>
        </div>
    }
}
