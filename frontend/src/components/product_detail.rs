use crate::components::icons::{StarIcon, StarOutlineIcon};
use crate::components::status::{ErrorAlert, LoadingIndicator, spawn_load};
use crate::session::use_session;
use crate::web::router::use_product_id;
use leptos::prelude::*;
use storefront::{Generation, ViewState};
use storefront_shared::date::format_review_date;
use storefront_shared::initials::reviewer_initials;
use storefront_shared::rating::{Star, StarRating};
use storefront_shared::{Product, Review};

/// 商品详情页
///
/// 路由中的商品 id 变化时重新加载；旧 id 的迟到响应会被丢弃。
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let session = use_session();
    let product_id = use_product_id();
    let state = RwSignal::new(ViewState::<Product>::Idle);
    let generation = Generation::new();

    Effect::new({
        let generation = generation.clone();
        move |_| {
            if let Some(id) = product_id.get() {
                let api = session.api();
                spawn_load(state, &generation, async move {
                    api.fetch_product_by_id(&id).await
                });
            }
        }
    });
    on_cleanup(move || generation.invalidate());

    move || match state.get() {
        ViewState::Idle | ViewState::Loading => view! { <LoadingIndicator /> }.into_any(),
        ViewState::Failed(error) => view! { <ErrorAlert error=error /> }.into_any(),
        ViewState::Ready(product) => view! { <ProductDetail product=product /> }.into_any(),
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let reviews = product.reviews.clone();

    view! {
        <div class="container mx-auto p-8 flex flex-col gap-6">
            <div class="flex flex-col md:flex-row gap-6">
                <div class="flex-1 flex items-center justify-center">
                    <img src=product.thumbnail.clone() alt=product.title.clone() class="max-w-full object-contain" />
                </div>
                <div class="flex-1 space-y-1">
                    <h1 class="text-2xl sm:text-3xl font-bold">{product.title.clone()}</h1>
                    <p class="text-base-content/70 mb-4">{product.description.clone()}</p>
                    <DetailRow label="Price:">{format!("${}", product.price)}</DetailRow>
                    <DetailRow label="Stock:">{product.stock}</DetailRow>
                    <DetailRow label="Category:">{product.category.clone()}</DetailRow>
                    <DetailRow label="Brand:">{product.brand.clone().unwrap_or_default()}</DetailRow>
                    <DetailRow label="Rating:"><StarRow rating=product.rating /></DetailRow>
                    <DetailRow label="Discount:">{format!("{}%", product.discount_percentage)}</DetailRow>
                </div>
            </div>

            <div class="divider"></div>

            <div>
                <h2 class="text-xl font-semibold mb-4">"Reviews:"</h2>
                {if reviews.is_empty() {
                    view! { <p class="text-base-content/70">"No reviews available."</p> }.into_any()
                } else {
                    reviews
                        .into_iter()
                        .map(|review| view! { <ReviewItem review=review /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <strong>{label}</strong>
            {children()}
        </div>
    }
}

/// 五星评分；半星用半透明实心星表示
#[component]
fn StarRow(rating: f64) -> impl IntoView {
    let stars = StarRating::from_rating(rating);

    view! {
        <div class="flex items-center text-warning" title=rating.to_string()>
            {stars
                .into_iter()
                .map(|star| match star {
                    Star::Full => view! { <StarIcon /> }.into_any(),
                    Star::Half => view! { <StarIcon class="h-5 w-5 opacity-50" /> }.into_any(),
                    Star::Empty => view! { <StarOutlineIcon /> }.into_any(),
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4 mb-4">
            <div class="flex-none w-12 h-12 rounded-full bg-base-300 flex items-center justify-center font-bold text-white">
                {reviewer_initials(&review.reviewer_name)}
            </div>
            <div>
                <p>
                    <strong>{review.reviewer_name.clone()}</strong>
                    ": "
                    {review.comment.clone()}
                </p>
                <StarRow rating=review.rating />
                <p class="text-sm text-base-content/70">
                    "Date: " {format_review_date(&review.date)}
                </p>
            </div>
        </div>
    }
}
