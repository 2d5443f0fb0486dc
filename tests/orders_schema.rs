use ecommerce_schema::{
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{
        Addresses, OrderItems, Orders, Payments, ProductVariants, addresses, cart_items, carts,
        categories, coupons, customer_profiles, order_items, orders, payments, product_variants,
        products, return_requests, shipments, users, wishlist_items, wishlists,
    },
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    Statement,
};
use serde_json::json;

use ecommerce_schema::entity::orders::OrderStatus;
use ecommerce_schema::entity::payments::PaymentStatus;
use ecommerce_schema::entity::return_requests::ReturnReason;
use ecommerce_schema::entity::shipments::ShipmentStatus;

// Orders schema flow: cart and wishlist uniqueness, order snapshots,
// payment/shipment/return records, protected addresses, cascades.
#[tokio::test]
async fn orders_schema_flow() -> anyhow::Result<()> {
    let Some(orm) = setup_conn().await? else {
        return Ok(());
    };

    let user = users::ActiveModel {
        email: Set("customer@example.com".to_string()),
        password_hash: Set("dummy".to_string()),
        role: Set("user".to_string()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    // Exactly one profile per user.
    customer_profiles::ActiveModel {
        user_id: Set(user.id),
        phone: Set("+91-9000000001".to_string()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let second_profile = customer_profiles::ActiveModel {
        user_id: Set(user.id),
        ..Default::default()
    }
    .insert(&orm)
    .await;
    assert!(second_profile.is_err(), "second profile for a user must fail");

    // Addresses list the default first.
    let home = addresses::ActiveModel {
        user_id: Set(user.id),
        full_name: Set("A. Customer".to_string()),
        phone: Set("+91-9000000001".to_string()),
        line1: Set("12 MG Road".to_string()),
        city: Set("Bengaluru".to_string()),
        state: Set("Karnataka".to_string()),
        pincode: Set("560001".to_string()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let office = addresses::ActiveModel {
        user_id: Set(user.id),
        full_name: Set("A. Customer".to_string()),
        phone: Set("+91-9000000001".to_string()),
        line1: Set("80 Residency Road".to_string()),
        city: Set("Bengaluru".to_string()),
        state: Set("Karnataka".to_string()),
        pincode: Set("560025".to_string()),
        is_default: Set(true),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let listed = Addresses::find_default_first()
        .filter(addresses::Column::UserId.eq(user.id))
        .all(&orm)
        .await?;
    assert_eq!(listed[0].id, office.id);

    // Minimal catalog for line items.
    let category = categories::ActiveModel {
        name: Set("Shirts".to_string()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let product = products::ActiveModel {
        name: Set("Classic Oxford".to_string()),
        category_id: Set(category.id),
        base_price: Set(Decimal::new(149_900, 2)),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let variant = product_variants::ActiveModel {
        product_id: Set(product.id),
        sku: Set("OXF-BLU-M".to_string()),
        mrp_price: Set(Decimal::new(149_900, 2)),
        sale_price: Set(Decimal::new(129_900, 2)),
        stock: Set(10),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    // Coupon codes are unique.
    let coupon = coupons::ActiveModel {
        code: Set("WELCOME10".to_string()),
        percent_off: Set(Some(Decimal::new(1_000, 2))),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let duplicate_code = coupons::ActiveModel {
        code: Set("WELCOME10".to_string()),
        ..Default::default()
    }
    .insert(&orm)
    .await;
    assert!(duplicate_code.is_err(), "duplicate coupon code must fail");

    // One (cart, variant) line per cart.
    let cart = carts::ActiveModel {
        user_id: Set(Some(user.id)),
        coupon_id: Set(Some(coupon.id)),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    cart_items::ActiveModel {
        cart_id: Set(cart.id),
        variant_id: Set(variant.id),
        quantity: Set(2),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let duplicate_line = cart_items::ActiveModel {
        cart_id: Set(cart.id),
        variant_id: Set(variant.id),
        ..Default::default()
    }
    .insert(&orm)
    .await;
    assert!(duplicate_line.is_err(), "duplicate cart line must fail");

    // A variant in a cart cannot be deleted out from under it.
    let blocked = ProductVariants::delete_by_id(variant.id).exec(&orm).await;
    assert!(blocked.is_err(), "variant referenced by a cart must not be deletable");

    // Wishlists are unique per (user, name), items per (wishlist, product).
    let wishlist = wishlists::ActiveModel {
        user_id: Set(user.id),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    assert_eq!(wishlist.name, "Default");
    let duplicate_wishlist = wishlists::ActiveModel {
        user_id: Set(user.id),
        name: Set("Default".to_string()),
        ..Default::default()
    }
    .insert(&orm)
    .await;
    assert!(duplicate_wishlist.is_err(), "duplicate wishlist name must fail");
    wishlist_items::ActiveModel {
        wishlist_id: Set(wishlist.id),
        product_id: Set(product.id),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let duplicate_item = wishlist_items::ActiveModel {
        wishlist_id: Set(wishlist.id),
        product_id: Set(product.id),
        ..Default::default()
    }
    .insert(&orm)
    .await;
    assert!(duplicate_item.is_err(), "duplicate wishlist item must fail");

    // Order with snapshot line item.
    let order = orders::ActiveModel {
        user_id: Set(Some(user.id)),
        number: Set("ORD-2026-000001".to_string()),
        status: Set(OrderStatus::Pending),
        subtotal: Set(Decimal::new(259_800, 2)),
        discount_total: Set(Decimal::new(25_980, 2)),
        grand_total: Set(Decimal::new(233_820, 2)),
        coupon_id: Set(Some(coupon.id)),
        billing_address_id: Set(home.id),
        shipping_address_id: Set(office.id),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    let line = order_items::ActiveModel {
        order_id: Set(order.id),
        product_id: Set(product.id),
        variant_id: Set(variant.id),
        name: Set(product.name.clone()),
        sku: Set(variant.sku.clone()),
        unit_price: Set(variant.sale_price),
        quantity: Set(2),
        line_total: Set(Decimal::new(259_800, 2)),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    // Order numbers are unique.
    let duplicate_number = orders::ActiveModel {
        number: Set("ORD-2026-000001".to_string()),
        subtotal: Set(Decimal::ZERO),
        grand_total: Set(Decimal::ZERO),
        billing_address_id: Set(home.id),
        shipping_address_id: Set(home.id),
        ..Default::default()
    }
    .insert(&orm)
    .await;
    assert!(duplicate_number.is_err(), "duplicate order number must fail");

    // Addresses referenced by an order are protected.
    let blocked = Addresses::delete_by_id(home.id).exec(&orm).await;
    assert!(blocked.is_err(), "address referenced by an order must not be deletable");

    // Snapshots are point-in-time: a later price change leaves them alone.
    let mut reprice = product_variants::ActiveModel::from(variant.clone());
    reprice.sale_price = Set(Decimal::new(99_900, 2));
    reprice.update(&orm).await?;
    let line = OrderItems::find_by_id(line.id)
        .one(&orm)
        .await?
        .expect("order line");
    assert_eq!(line.unit_price, Decimal::new(129_900, 2));

    // Payment, shipment, and return records hang off the order.
    payments::ActiveModel {
        order_id: Set(order.id),
        provider: Set("razorpay".to_string()),
        amount: Set(order.grand_total),
        status: Set(PaymentStatus::Captured),
        transaction_id: Set("pay_000123".to_string()),
        meta: Set(json!({"method": "upi"})),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    shipments::ActiveModel {
        order_id: Set(order.id),
        status: Set(ShipmentStatus::Pending),
        carrier: Set("delhivery".to_string()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    return_requests::ActiveModel {
        order_id: Set(order.id),
        order_item_id: Set(line.id),
        reason: Set(ReturnReason::SizeFit),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    // Deleting the order cascades to its children.
    Orders::delete_by_id(order.id).exec(&orm).await?;
    let remaining_payments = Payments::find()
        .filter(payments::Column::OrderId.eq(order.id))
        .count(&orm)
        .await?;
    assert_eq!(remaining_payments, 0);
    let remaining_lines = OrderItems::find()
        .filter(order_items::Column::OrderId.eq(order.id))
        .count(&orm)
        .await?;
    assert_eq!(remaining_lines, 0);

    Ok(())
}

async fn setup_conn() -> anyhow::Result<Option<OrmConn>> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run schema integration tests."
            );
            return Ok(None);
        }
    };

    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE return_requests, shipments, payments, order_items, orders, \
         wishlist_items, wishlists, cart_items, carts, coupons, addresses, customer_profiles, \
         reviews, variant_attribute_values, product_variants, attribute_values, attributes, \
         product_images, products, brands, categories, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(Some(orm))
}
