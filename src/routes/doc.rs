use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartEntry, CartList, UpdateCartItemRequest},
        feedback::{CreateFeedbackRequest, FeedbackList},
        interactions::{
            CreateInteractionRequest, CreateNegInteractionRequest, InteractionList,
            NegInteractionList,
        },
        logins::CreateLoginRequest,
        orders::{
            CheckoutItem, CheckoutRequest, OrderLine, OrderList, OrderWithItems,
            UpdateOrderStatusRequest,
        },
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        users::{CreateUserRequest, UpdateUserRequest, UserList},
        wishlist::{AddWishlistRequest, WishlistProductList},
    },
    models::{
        CartItem, Feedback, Interaction, LoginAccount, NegInteraction, Order, Product, User,
        WishlistItem,
    },
    response::{ApiResponse, Meta},
    routes::{
        cart, feedback, health, interactions, logins, orders, params, products, users, wishlist,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::db_health_check,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        feedback::create_feedback,
        feedback::list_product_feedback,
        feedback::list_user_feedback,
        feedback::delete_feedback,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        wishlist::list_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        logins::create_login,
        logins::get_login,
        interactions::record_interaction,
        interactions::list_interactions,
        interactions::record_neg_interaction,
        interactions::list_neg_interactions,
        orders::checkout,
        orders::order_history,
        orders::get_order,
        orders::update_order_status
    ),
    components(
        schemas(
            User,
            Product,
            Feedback,
            CartItem,
            Order,
            WishlistItem,
            LoginAccount,
            Interaction,
            NegInteraction,
            CreateUserRequest,
            UpdateUserRequest,
            UserList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CreateFeedbackRequest,
            FeedbackList,
            AddToCartRequest,
            UpdateCartItemRequest,
            CartEntry,
            CartList,
            AddWishlistRequest,
            WishlistProductList,
            CreateLoginRequest,
            CreateInteractionRequest,
            CreateNegInteractionRequest,
            InteractionList,
            NegInteractionList,
            CheckoutItem,
            CheckoutRequest,
            OrderLine,
            OrderWithItems,
            OrderList,
            UpdateOrderStatusRequest,
            params::Pagination,
            params::ProductQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<User>,
            ApiResponse<Product>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Feedback", description = "Product feedback endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Logins", description = "Login credential endpoints"),
        (name = "Interactions", description = "Implicit feedback event endpoints"),
        (name = "Orders", description = "Checkout and order history endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
