use super::AppTheme;

/// Glass Red - near-black glass with the brand red accent (default)
pub fn glass_red() -> AppTheme {
    AppTheme::from_hex(
        "Glass Red",
        0x000F_0F0F, // bg_base - Near black
        0x0014_1414, // bg_sidebar
        0x001F_1F1F, // bg_surface - Card glass
        0x0027_2727, // bg_elevated - Search box, chips
        0x0033_3333, // bg_hover
        0x003F_3F3F, // bg_active - Selected section
        0x00F1_F1F1, // fg_primary
        0x00AA_AAAA, // fg_secondary - Channel, views
        0x0071_7171, // fg_muted
        0x00FF_FFFF, // fg_on_accent
        0x00FF_0033, // accent - Brand red
        0x00FF_4D6A, // accent_hover
        0x002B_A640, // success
        0x00F2_B233, // warning
        0x00E5_3935, // danger
        0x003E_A6FF, // info - Links
        0x002E_2E2E, // border
        0x00FF_0033, // border_strong
        0x0026_2626, // divider
    )
}

/// Glass Light - frosted white for daylight use
pub fn glass_light() -> AppTheme {
    AppTheme::from_hex(
        "Glass Light",
        0x00F9_F9F9, // bg_base
        0x00FF_FFFF, // bg_sidebar
        0x00FF_FFFF, // bg_surface
        0x00F0_F0F0, // bg_elevated
        0x00E5_E5E5, // bg_hover
        0x00D9_D9D9, // bg_active
        0x000F_0F0F, // fg_primary
        0x0060_6060, // fg_secondary
        0x0090_9090, // fg_muted
        0x00FF_FFFF, // fg_on_accent
        0x00CC_0029, // accent - Darker red for contrast on white
        0x00E6_0030, // accent_hover
        0x001E_8E3E, // success
        0x00B0_7A00, // warning
        0x00C6_2828, // danger
        0x0006_5FD4, // info
        0x00E0_E0E0, // border
        0x00CC_0029, // border_strong
        0x00EC_ECEC, // divider
    )
}

/// Midnight - deep blue glass with a cool violet accent
pub fn midnight() -> AppTheme {
    AppTheme::from_hex(
        "Midnight",
        0x000B_0E1A, // bg_base - Ink blue
        0x0009_0B15, // bg_sidebar
        0x0015_1A2E, // bg_surface
        0x001D_2440, // bg_elevated
        0x0026_2F52, // bg_hover
        0x0033_3E6B, // bg_active
        0x00E4_E8F5, // fg_primary
        0x00A0_A8C8, // fg_secondary
        0x0060_6890, // fg_muted
        0x000B_0E1A, // fg_on_accent
        0x008C_9EFF, // accent - Periwinkle
        0x00A8_B6FF, // accent_hover
        0x0069_DB8F, // success
        0x00F5_C26B, // warning
        0x00FF_6B81, // danger
        0x0060_C8FF, // info
        0x001D_2440, // border
        0x008C_9EFF, // border_strong
        0x0015_1A2E, // divider
    )
}

/// Nord - arctic palette, calm and low contrast
pub fn nord() -> AppTheme {
    AppTheme::from_hex(
        "Nord",
        0x002E_3440, // bg_base - Polar Night 0
        0x0024_2933, // bg_sidebar
        0x003B_4252, // bg_surface - Polar Night 1
        0x0043_4C5E, // bg_elevated - Polar Night 2
        0x004C_566A, // bg_hover - Polar Night 3
        0x005E_81AC, // bg_active - Frost 2
        0x00EC_EFF4, // fg_primary - Snow Storm 2
        0x00D8_DEE9, // fg_secondary - Snow Storm 1
        0x0061_6E88, // fg_muted
        0x002E_3440, // fg_on_accent
        0x00BF_616A, // accent - Aurora red, keeps the brand feel
        0x00D0_7A82, // accent_hover
        0x00A3_BE8C, // success - Aurora green
        0x00EB_CB8B, // warning - Aurora yellow
        0x00BF_616A, // danger - Aurora red
        0x0088_C0D0, // info - Frost 1
        0x0043_4C5E, // border
        0x0088_C0D0, // border_strong
        0x003B_4252, // divider
    )
}
