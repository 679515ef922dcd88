use super::AppTheme;

/// Slate - Default dark theme
/// Cool blue-gray surfaces with an indigo accent, tuned for long reading
pub fn slate() -> AppTheme {
    AppTheme::from_hex(
        "Slate",
        0x000F_1419, // bg_base - Near-black blue
        0x001A_2129, // bg_surface - Card surface
        0x0024_2D38, // bg_elevated - Buttons, inputs
        0x002E_3947, // bg_hover - Subtle highlight
        0x0036_4356, // bg_active - Selected cards/tabs
        0x00E6_EDF3, // fg_primary - Soft white text
        0x00AD_BAC7, // fg_secondary - Muted slate text
        0x0076_8390, // fg_muted - Placeholder gray
        0x00FF_FFFF, // fg_on_accent - White on indigo
        0x004F_7CFF, // accent - Indigo blue
        0x006B_92FF, // accent_hover - Lifted indigo
        0x003F_B950, // success - Green
        0x00D2_9922, // warning - Amber
        0x00F8_5149, // danger - Red
        0x0058_A6FF, // info - Sky blue
        0x002D_3843, // border - Subtle border
        0x0021_2B35, // divider - Separator
        0x000A_0E12, // code_bg - Terminal black
        0x005A_F78E, // code_fg - Terminal green
    )
}

/// Daylight - Light theme
/// Blue-tinted paper matching the original page's blue-to-indigo wash
pub fn daylight() -> AppTheme {
    AppTheme::from_hex(
        "Daylight",
        0x00EF_F6FF, // bg_base - Blue-tinted paper
        0x00FF_FFFF, // bg_surface - White cards
        0x00F3_F4F6, // bg_elevated - Buttons, inputs
        0x00E5_E7EB, // bg_hover - Gray hover
        0x00DB_EAFE, // bg_active - Selected blue wash
        0x001F_2937, // fg_primary - Near-black text
        0x004B_5563, // fg_secondary - Gray text
        0x009C_A3AF, // fg_muted - Placeholder gray
        0x00FF_FFFF, // fg_on_accent - White on blue
        0x003B_82F6, // accent - Primary blue
        0x0025_63EB, // accent_hover - Deeper blue
        0x0022_C55E, // success - Green
        0x00EA_B308, // warning - Yellow
        0x00EF_4444, // danger - Red
        0x0060_A5FA, // info - Light blue
        0x00D1_D5DB, // border - Gray border
        0x00E5_E7EB, // divider - Separator
        0x0011_1827, // code_bg - Terminal black
        0x004A_DE80, // code_fg - Terminal green
    )
}
