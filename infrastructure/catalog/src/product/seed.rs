use super::entity::ProductEntity;

const CAMERA_IMAGE: &str = "https://files.manuscdn.com/user_upload_by_module/session_file/310519663314029101/oHZJxwvhISskTVVi.jpg";
const E39_IMAGE: &str = "https://files.manuscdn.com/user_upload_by_module/session_file/310519663314029101/vSofWRJBURelufNk.jpg";
const M11_IMAGE: &str = "https://files.manuscdn.com/user_upload_by_module/session_file/310519663314029101/RUoxiVydxVKbmaZL.jpg";
const Q3_IMAGE: &str = "https://files.manuscdn.com/user_upload_by_module/session_file/310519663314029101/SaoNsZgdGxgySPBt.jpg";
const SL3_IMAGE: &str = "https://files.manuscdn.com/user_upload_by_module/session_file/310519663314029101/PtCGeSPBGqoqxYLl.jpg";
const E35_SPECIAL_IMAGE: &str = "https://files.manuscdn.com/user_upload_by_module/session_file/310519663314029101/TTxHBcWwevPXOsqr.jpg";

/// Hard-coded storefront catalog, in display order.
pub const PRODUCTS: &[ProductEntity] = &[
    ProductEntity {
        id: "1",
        name: "Classic Film Camera",
        category: "Film Cameras",
        price: "2499",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "A timeless mechanical camera with exceptional build quality and optical precision.",
        specs: &["35mm Film", "Manual Focus", "Mechanical Shutter", "All-Metal Body"],
        in_stock: true,
    },
    ProductEntity {
        id: "2",
        name: "Professional Digital SLR",
        category: "Digital Cameras",
        price: "3999",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Full-frame digital camera with advanced autofocus and 4K video capabilities.",
        specs: &["Full-Frame Sensor", "45MP Resolution", "4K Video", "Weather Sealed"],
        in_stock: true,
    },
    ProductEntity {
        id: "3",
        name: "Compact Travel Camera",
        category: "Compact Cameras",
        price: "1299",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Lightweight and portable camera perfect for travel and street photography.",
        specs: &["APS-C Sensor", "24MP Resolution", "Compact Design", "Silent Mode"],
        in_stock: true,
    },
    ProductEntity {
        id: "4",
        name: "Vintage Rangefinder",
        category: "Film Cameras",
        price: "1899",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Beautifully restored vintage rangefinder with pristine optics.",
        specs: &["35mm Film", "Rangefinder Focus", "Coated Lens", "Fully Functional"],
        in_stock: true,
    },
    ProductEntity {
        id: "5",
        name: "Medium Format Camera",
        category: "Digital Cameras",
        price: "5999",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Professional-grade medium format camera for studio and fashion photography.",
        specs: &["Medium Format Sensor", "100MP Resolution", "Phase Detection AF", "Tethering Support"],
        in_stock: false,
    },
    ProductEntity {
        id: "6",
        name: "Instant Film Camera",
        category: "Instant Cameras",
        price: "899",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Modern instant camera combining retro aesthetics with digital precision.",
        specs: &["Instant Film", "Digital Sensor", "Built-in Flash", "Manual Controls"],
        in_stock: true,
    },
    ProductEntity {
        id: "7",
        name: "Professional Video Camera",
        category: "Video Cameras",
        price: "4499",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Cinema-grade video camera with professional color science and codec options.",
        specs: &["8K Recording", "RAW Output", "Professional Codecs", "Modular Design"],
        in_stock: true,
    },
    ProductEntity {
        id: "8",
        name: "Mirrorless Hybrid",
        category: "Digital Cameras",
        price: "2799",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Versatile mirrorless camera excelling in both photography and videography.",
        specs: &["Full-Frame Sensor", "61MP Resolution", "8K Video", "AI Autofocus"],
        in_stock: true,
    },
    ProductEntity {
        id: "9",
        name: "Disposable Film Camera",
        category: "Film Cameras",
        price: "299",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Single-use film camera with simple operation and authentic film aesthetic.",
        specs: &["35mm Film", "Fixed Focus", "Built-in Flash", "Pre-loaded"],
        in_stock: true,
    },
    ProductEntity {
        id: "10",
        name: "Action Camera Pro",
        category: "Compact Cameras",
        price: "699",
        original_price: None,
        image: CAMERA_IMAGE,
        description: "Rugged action camera designed for extreme conditions and underwater use.",
        specs: &["4K Recording", "Waterproof", "Stabilization", "Compact Form Factor"],
        in_stock: true,
    },
    ProductEntity {
        id: "e39",
        name: "E39",
        category: "Lenses",
        price: "1899",
        original_price: None,
        image: E39_IMAGE,
        description: "35mm prime lens, the ideal companion for street photography. The f/1.4 aperture delivers excellent image quality in low light with beautiful bokeh.",
        specs: &["35mm", "f/1.4 - f/16", "11 elements in 8 groups", "0.3m minimum focus", "52mm filter", "M Mount"],
        in_stock: true,
    },
    ProductEntity {
        id: "e35-special",
        name: "E35 Special Edition",
        category: "Lenses",
        price: "4299",
        original_price: Some("4799"),
        image: E35_SPECIAL_IMAGE,
        description: "Limited to 500 numbered units worldwide, with a brass body, titanium alloy parts and two aspherical elements.",
        specs: &["35mm", "2 aspherical elements", "0.25m minimum focus", "Brass body", "Numbered certificate"],
        in_stock: true,
    },
    // Flagship bodies with their own detail pages
    ProductEntity {
        id: "m11-monochrom",
        name: "M11 Monochrom",
        category: "Digital Cameras",
        price: "68000",
        original_price: None,
        image: M11_IMAGE,
        description: "Rangefinder with a dedicated black-and-white sensor, built for photographers who see in light and shadow.",
        specs: &["Monochrome full-frame sensor", "M Mount", "Mechanical and electronic shutter", "Weather-sealed body"],
        in_stock: true,
    },
    ProductEntity {
        id: "q3-classic",
        name: "Q3 Classic",
        category: "Digital Cameras",
        price: "52000",
        original_price: None,
        image: Q3_IMAGE,
        description: "Full-frame compact with a fixed fast prime lens, for everyday photography without compromise.",
        specs: &["Full-frame sensor", "Fixed 28mm prime lens", "Leaf shutter", "Weather-sealed body"],
        in_stock: true,
    },
    ProductEntity {
        id: "sl3-professional",
        name: "SL3 Professional",
        category: "Digital Cameras",
        price: "78000",
        original_price: None,
        image: SL3_IMAGE,
        description: "Mirrorless system camera for professional stills and video work.",
        specs: &["Full-frame sensor", "L Mount", "Cinema-grade video", "Weather-sealed body"],
        in_stock: true,
    },
];
