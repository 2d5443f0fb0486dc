pub mod addresses;
pub mod attribute_values;
pub mod attributes;
pub mod brands;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod coupons;
pub mod customer_profiles;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod product_images;
pub mod product_variants;
pub mod products;
pub mod return_requests;
pub mod reviews;
pub mod shipments;
pub mod users;
pub mod variant_attribute_values;
pub mod wishlist_items;
pub mod wishlists;

pub use addresses::Entity as Addresses;
pub use attribute_values::Entity as AttributeValues;
pub use attributes::Entity as Attributes;
pub use brands::Entity as Brands;
pub use cart_items::Entity as CartItems;
pub use carts::Entity as Carts;
pub use categories::Entity as Categories;
pub use coupons::Entity as Coupons;
pub use customer_profiles::Entity as CustomerProfiles;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use payments::Entity as Payments;
pub use product_images::Entity as ProductImages;
pub use product_variants::Entity as ProductVariants;
pub use products::Entity as Products;
pub use return_requests::Entity as ReturnRequests;
pub use reviews::Entity as Reviews;
pub use shipments::Entity as Shipments;
pub use users::Entity as Users;
pub use variant_attribute_values::Entity as VariantAttributeValues;
pub use wishlist_items::Entity as WishlistItems;
pub use wishlists::Entity as Wishlists;
