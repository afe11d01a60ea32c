//! Info Sheet
//!
//! The printable handout for a confirmed recipe, plus a flat text layout
//! used for printing and for the QR payload.

use shared::models::{
    BusinessInfo, CoreIngredient, InfoSheet, ProductInfo, RecipePreview, ShareLink,
};

use crate::catalog::Catalog;

pub const TITLE: &str = "맞춤형화장품 정보";
pub const EFFECT_FALLBACK: &str = "상세 효능 정보가 없습니다.";
pub const USAGE_FALLBACK: &str = "제품 유형에 맞는 사용법을 따르세요.";

pub struct SheetParties<'a> {
    pub seller: &'a BusinessInfo,
    pub manufacturer: &'a BusinessInfo,
}

pub fn build_sheet(
    catalog: &Catalog,
    preview: &RecipePreview,
    product_info: &ProductInfo,
    parties: SheetParties<'_>,
    share: Option<ShareLink>,
) -> InfoSheet {
    let core_ingredients = preview
        .core_ingredients
        .iter()
        .map(|i| CoreIngredient {
            name: i.name.clone(),
            effect: if i.effect.trim().is_empty() {
                EFFECT_FALLBACK.to_string()
            } else {
                i.effect.clone()
            },
        })
        .collect();

    let usage = if preview.usage.trim().is_empty() {
        USAGE_FALLBACK.to_string()
    } else {
        preview.usage.clone()
    };

    InfoSheet {
        title: TITLE.to_string(),
        product_name: preview.product_name.clone(),
        skin_type: preview.skin_type.clone(),
        concept: preview.concept.clone(),
        core_ingredients,
        usage,
        full_ingredients: preview.full_ingredients.clone(),
        precautions: catalog.precautions().to_vec(),
        product_info: product_info.clone(),
        seller: parties.seller.clone(),
        manufacturer: parties.manufacturer.clone(),
        share,
    }
}

/// Plain-text layout: official block, then recipe details
pub fn render_text(sheet: &InfoSheet) -> String {
    let info = &sheet.product_info;
    let (code, summary, description) = match &sheet.skin_type {
        Some(t) => (t.code.as_str(), t.summary.as_str(), t.description.as_str()),
        None => ("", "", ""),
    };
    let core = sheet
        .core_ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let lines = [
        "======= 맞춤형 화장품 정보 =======".to_string(),
        format!("제품명: {}", sheet.product_name),
        format!("조제일: {}", info.prep_date),
        format!("조제번호: {}", info.prep_number),
        format!("사용기한: {}", info.use_by_date),
        format!("용량: {}", info.volume),
        format!("가격: {}", info.price),
        format!("판매업자: {} ({})", sheet.seller.name, sheet.seller.address),
        format!("조제관리사: {}", info.manager_name),
        "\n======= 레시피 상세 정보 =======".to_string(),
        format!("피부타입: {code} ({summary})"),
        format!("설명: {description}"),
        format!("\n컨셉: {}", sheet.concept),
        format!("\n핵심성분: {core}"),
        format!("\n전성분: {}", sheet.full_ingredients.join(", ")),
    ];
    lines.join("\n")
}

/// Section-by-section printable layout
pub fn render_document(sheet: &InfoSheet) -> String {
    let mut out = String::new();
    let info = &sheet.product_info;

    out.push_str(&format!("{}\n{}\n\n", sheet.title, sheet.product_name));

    out.push_str("1. 피부 타입 및 설명\n");
    if let Some(t) = &sheet.skin_type {
        out.push_str(&format!("{} - {}\n{}\n", t.code, t.summary, t.description));
    }

    out.push_str(&format!("\n2. 제품 컨셉\n{}\n", sheet.concept));

    out.push_str("\n3. 핵심 성분 및 효능\n");
    for i in &sheet.core_ingredients {
        out.push_str(&format!("- {}: {}\n", i.name, i.effect));
    }

    out.push_str(&format!("\n4. 사용 방법\n{}\n", sheet.usage));
    out.push_str(&format!("\n5. 전성분\n{}\n", sheet.full_ingredients.join(", ")));

    out.push_str("\n6. 사용 시의 주의사항\n");
    for section in &sheet.precautions {
        out.push_str(&format!("[{}]\n", section.title));
        for item in &section.items {
            out.push_str(&format!("- {item}\n"));
        }
    }

    let phone = sheet.seller.phone.as_deref().unwrap_or("");
    let official = [
        ("제품명", sheet.product_name.as_str()),
        ("조제일", info.prep_date.as_str()),
        ("조제번호", info.prep_number.as_str()),
        ("사용기한", info.use_by_date.as_str()),
        ("용량", info.volume.as_str()),
        ("가격", info.price.as_str()),
        ("맞춤형화장품판매업자", sheet.seller.name.as_str()),
        ("조제관리사", info.manager_name.as_str()),
        ("주소", sheet.seller.address.as_str()),
        ("전화번호", phone),
        ("제조책임판매업자", sheet.manufacturer.name.as_str()),
        ("주소", sheet.manufacturer.address.as_str()),
    ];
    out.push('\n');
    for (label, value) in official {
        out.push_str(&format!("{label}: {value}\n"));
    }

    if let Some(share) = &sheet.share {
        out.push_str(&format!("\n{}\n", share.url));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture;
    use crate::composer::{compose, confirmation};
    use chrono::NaiveDate;
    use shared::models::{RecipeDraft, SkinAxis, SkinMark};

    fn parties() -> (BusinessInfo, BusinessInfo) {
        (
            BusinessInfo {
                name: "명에스테틱".into(),
                address: "부산 동래구 안남로 80, 4층".into(),
                phone: Some("051-582-0102".into()),
            },
            BusinessInfo {
                name: "주식회사 제이케이아이앤씨".into(),
                address: "부산광역시남구 신선로 365".into(),
                phone: None,
            },
        )
    }

    fn sheet(base_id: &str) -> InfoSheet {
        let catalog = fixture();
        let mut draft = RecipeDraft {
            customer_name: "김민지".into(),
            manager_name: "박조제".into(),
            base_id: base_id.into(),
            fragrance: Some("Citrus".into()),
            ..Default::default()
        };
        let marks = [SkinMark::D, SkinMark::S, SkinMark::P, SkinMark::W, SkinMark::C];
        for (axis, mark) in SkinAxis::ALL.into_iter().zip(marks) {
            draft.skin.select(axis, mark).unwrap();
        }
        let preview = compose(&catalog, &draft).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let info = confirmation::product_info(&catalog, &draft, date, 1);
        let (seller, manufacturer) = parties();
        build_sheet(
            &catalog,
            &preview,
            &info,
            SheetParties {
                seller: &seller,
                manufacturer: &manufacturer,
            },
            None,
        )
    }

    #[test]
    fn test_sheet_fallbacks() {
        let sheet = sheet("nv1");
        assert_eq!(sheet.title, TITLE);
        assert_eq!(sheet.usage, USAGE_FALLBACK);
        assert_eq!(sheet.product_name, "김민지님 맞춤 제품");
        assert_eq!(sheet.product_info.volume, "N/A");

        // Citrus has no effect text in the fixture
        let citrus = sheet.core_ingredients.iter().find(|i| i.name == "Citrus").unwrap();
        assert_eq!(citrus.effect, EFFECT_FALLBACK);
        let arbutin = sheet.core_ingredients.iter().find(|i| i.name == "알부틴").unwrap();
        assert_eq!(arbutin.effect, "미백");
        assert_eq!(sheet.precautions.len(), 1);
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sheet("cb1"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "======= 맞춤형 화장품 정보 =======");
        assert_eq!(lines[1], "제품명: 김민지님 맞춤 크림");
        assert_eq!(lines[3], "조제번호: cb12024050301");
        assert_eq!(lines[5], "용량: 30g");
        assert_eq!(lines[6], "가격: 별도 문의");
        assert_eq!(lines[7], "판매업자: 명에스테틱 (부산 동래구 안남로 80, 4층)");
        assert!(text.contains("\n\n======= 레시피 상세 정보 =======\n피부타입: DSPWC (건조, 민감성, 색소성, 주름진 피부)"));
        assert!(text.contains("\n\n핵심성분: 병풀추출물, 알부틴, Citrus"));
        assert!(text.ends_with("전성분: 정제수, 글리세린, 병풀추출물, 알부틴, 향료"));
    }

    #[test]
    fn test_render_document_sections_in_order() {
        let doc = render_document(&sheet("cb1"));
        let positions: Vec<usize> = [
            "1. 피부 타입 및 설명",
            "2. 제품 컨셉",
            "3. 핵심 성분 및 효능",
            "4. 사용 방법",
            "5. 전성분",
            "6. 사용 시의 주의사항",
            "맞춤형화장품판매업자: 명에스테틱",
            "전화번호: 051-582-0102",
            "제조책임판매업자: 주식회사 제이케이아이앤씨",
        ]
        .iter()
        .map(|needle| doc.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(doc.contains("- 알부틴: 미백"));
    }
}
