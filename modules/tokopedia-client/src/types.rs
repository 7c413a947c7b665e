//! Typed views of the upstream GraphQL responses.
//!
//! The endpoint is unversioned and the layout payload is a loose bag of UI
//! "components", so almost every field is optional on the wire. Absent
//! components or fields leave the corresponding output at its zero value;
//! only a missing `basicInfo` block (or a non-empty top-level `errors`
//! array) fails a product fetch.

use serde::Deserialize;

use ulascan_common::Product;

use crate::error::{Result, TokopediaError};

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

// --- Product layout ---

#[derive(Debug, Deserialize)]
pub(crate) struct ProductLayoutData {
    #[serde(rename = "pdpGetLayout")]
    pub pdp_get_layout: Option<ProductLayout>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductLayout {
    #[serde(rename = "basicInfo")]
    pub basic_info: Option<BasicInfo>,
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BasicInfo {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "shopName", default)]
    pub shop_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Component {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Vec<ComponentData>,
}

/// One data entry inside a layout component. Which fields are populated
/// depends on the component: `product_content` carries the display name,
/// `product_detail` carries titled content rows, the media component
/// carries the image gallery.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ComponentData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: Vec<ContentRow>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentRow {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "urlOriginal", default)]
    pub url_original: String,
}

pub(crate) fn extract_product(layout: ProductLayout) -> Result<Product> {
    let basic = layout
        .basic_info
        .ok_or(TokopediaError::NotFound("product"))?;

    let mut name = String::new();
    let mut description = String::new();
    for component in &layout.components {
        match component.name.as_str() {
            "product_content" => {
                if let Some(data) = component.data.first() {
                    name = data.name.clone();
                }
            }
            "product_detail" => {
                description = component
                    .data
                    .first()
                    .and_then(|d| d.content.iter().find(|row| row.title == "Deskripsi"))
                    .map(|row| row.subtitle.clone())
                    .unwrap_or_default();
            }
            _ => {}
        }
    }

    // The image gallery lives in the second component's first data entry.
    let image_urls = layout
        .components
        .get(1)
        .and_then(|c| c.data.first())
        .map(|d| {
            d.media
                .iter()
                .filter(|m| m.kind == "image")
                .map(|m| m.url_original.clone())
                .collect()
        })
        .unwrap_or_default();

    Ok(Product {
        product_id: basic.id,
        name,
        description,
        shop_name: basic.shop_name,
        image_urls,
    })
}

// --- Review list ---

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReviewListData {
    #[serde(rename = "productrevGetProductReviewList", default)]
    pub review_list: ReviewList,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReviewList {
    #[serde(default)]
    pub list: Vec<ReviewItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewItem {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "productRating", default)]
    pub product_rating: i32,
}

// --- Shop info ---

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShopInfoData {
    #[serde(rename = "shopInfoByID", default)]
    pub shop_info: ShopInfo,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShopInfo {
    #[serde(default)]
    pub result: Vec<ShopResult>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShopResult {
    #[serde(rename = "shopAssets", default)]
    pub shop_assets: ShopAssets,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShopAssets {
    #[serde(default)]
    pub avatar: String,
}
