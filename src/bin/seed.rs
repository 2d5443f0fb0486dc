use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecommerce_schema::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, create_pool, run_sqlx_migrations},
    entity::{
        AttributeValues, Attributes, Brands, Categories, ProductVariants, Products,
        VariantAttributeValues,
        attribute_values, attributes, brands, categories, product_variants, products,
        variant_attribute_values,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ecommerce_schema=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    // Ensure migrations are applied.
    let pool = create_pool(&config.database_url).await?;
    run_sqlx_migrations(&pool).await?;
    let orm = create_orm_conn(&config.database_url).await?;

    let category = ensure_category(&orm, "Men's Shirts").await?;
    let brand = ensure_brand(&orm, "Oxford & Co").await?;
    let product = ensure_product(
        &orm,
        &category,
        &brand,
        "Classic Oxford",
        Decimal::new(149_900, 2),
        &config.default_currency,
    )
    .await?;

    let color = ensure_attribute(&orm, "Color").await?;
    let size = ensure_attribute(&orm, "Size").await?;
    let blue = ensure_attribute_value(&orm, &color, "Blue", "#1f4e8c").await?;
    let medium = ensure_attribute_value(&orm, &size, "M", "").await?;
    let large = ensure_attribute_value(&orm, &size, "L", "").await?;

    let variant_m = ensure_variant(&orm, &product, "OXF-BLU-M", 25).await?;
    let variant_l = ensure_variant(&orm, &product, "OXF-BLU-L", 18).await?;
    link_variant_attribute(&orm, &variant_m, &blue).await?;
    link_variant_attribute(&orm, &variant_m, &medium).await?;
    link_variant_attribute(&orm, &variant_l, &blue).await?;
    link_variant_attribute(&orm, &variant_l, &large).await?;

    tracing::info!(
        category = %category.slug,
        product = %product.slug,
        "seed completed"
    );
    Ok(())
}

async fn ensure_category(orm: &OrmConn, name: &str) -> anyhow::Result<categories::Model> {
    if let Some(existing) = Categories::find()
        .filter(categories::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing);
    }
    let category = categories::ActiveModel {
        name: Set(name.to_string()),
        description: Set("Everyday shirting for men".to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    tracing::info!(name = %category.name, slug = %category.slug, "created category");
    Ok(category)
}

async fn ensure_brand(orm: &OrmConn, name: &str) -> anyhow::Result<brands::Model> {
    if let Some(existing) = Brands::find()
        .filter(brands::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing);
    }
    let brand = brands::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    tracing::info!(name = %brand.name, slug = %brand.slug, "created brand");
    Ok(brand)
}

async fn ensure_product(
    orm: &OrmConn,
    category: &categories::Model,
    brand: &brands::Model,
    name: &str,
    base_price: Decimal,
    currency: &str,
) -> anyhow::Result<products::Model> {
    if let Some(existing) = Products::find()
        .filter(products::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing);
    }
    let product = products::ActiveModel {
        name: Set(name.to_string()),
        category_id: Set(category.id),
        brand_id: Set(Some(brand.id)),
        description: Set("Button-down oxford shirt".to_string()),
        base_price: Set(base_price),
        currency: Set(currency.to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    tracing::info!(name = %product.name, slug = %product.slug, "created product");
    Ok(product)
}

async fn ensure_attribute(orm: &OrmConn, name: &str) -> anyhow::Result<attributes::Model> {
    if let Some(existing) = Attributes::find()
        .filter(attributes::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing);
    }
    let attribute = attributes::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok(attribute)
}

async fn ensure_attribute_value(
    orm: &OrmConn,
    attribute: &attributes::Model,
    value: &str,
    hex_code: &str,
) -> anyhow::Result<attribute_values::Model> {
    if let Some(existing) = AttributeValues::find()
        .filter(attribute_values::Column::AttributeId.eq(attribute.id))
        .filter(attribute_values::Column::Value.eq(value))
        .one(orm)
        .await?
    {
        return Ok(existing);
    }
    let attribute_value = attribute_values::ActiveModel {
        attribute_id: Set(attribute.id),
        value: Set(value.to_string()),
        hex_code: Set(hex_code.to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok(attribute_value)
}

async fn ensure_variant(
    orm: &OrmConn,
    product: &products::Model,
    sku: &str,
    stock: i32,
) -> anyhow::Result<product_variants::Model> {
    if let Some(existing) = ProductVariants::find()
        .filter(product_variants::Column::Sku.eq(sku))
        .one(orm)
        .await?
    {
        return Ok(existing);
    }
    let variant = product_variants::ActiveModel {
        product_id: Set(product.id),
        sku: Set(sku.to_string()),
        mrp_price: Set(product.base_price),
        sale_price: Set(product.base_price),
        stock: Set(stock),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    tracing::info!(sku = %variant.sku, "created variant");
    Ok(variant)
}

async fn link_variant_attribute(
    orm: &OrmConn,
    variant: &product_variants::Model,
    attribute_value: &attribute_values::Model,
) -> anyhow::Result<()> {
    let existing = VariantAttributeValues::find_by_id((variant.id, attribute_value.id))
        .one(orm)
        .await?;
    if existing.is_none() {
        variant_attribute_values::ActiveModel {
            variant_id: Set(variant.id),
            attribute_value_id: Set(attribute_value.id),
        }
        .insert(orm)
        .await?;
    }
    Ok(())
}
