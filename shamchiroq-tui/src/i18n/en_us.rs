//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ErrorModalTexts, HelpTexts, HintActions, HintKeys, HintTexts, ListTexts,
    LogoutModalTexts, ModalTexts, NavTexts, ResourceTexts, SignInModalTexts, SignedOutTexts,
    StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Shamchiroq",
        cancel: "Cancel",
        loading: "Loading...",
        page_not_found: "Page not found",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: HintKeys {
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            menu: "m",
            paging: "n/p",
            refresh: "Alt+r",
            logout: "Alt+l",
            help: "?",
            quit: "Ctrl+c",
        },
        actions: HintActions {
            switch_panel: "Switch Panel",
            move_cursor: "Move",
            open: "Open",
            menu: "Menu",
            page: "Page",
            refresh: "Refresh",
            sign_in: "Sign in",
            logout: "Log out",
            help: "Help",
            quit: "Quit",
            cancel: "Cancel",
            submit: "Submit",
        },
    },

    // ========================================================================
    // 导航
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        reports: "Reports",
        users: "Users",
        items: "Items",
        blocks: "Blocks",
        notifications: "Notifications",
        logout: "Log out",
    },

    // ========================================================================
    // 列表页
    // ========================================================================
    lists: ListTexts {
        page: "Page",
        rows: "rows",
        refreshing: "Refreshing...",
        unavailable: "Could not load data.",
        unavailable_hint: "Press Alt+r to try again.",
        reports: ResourceTexts {
            columns: &["ID", "Reason", "Reporter", "Target", "Status", "Created"],
            empty: "No reports found...",
        },
        users: ResourceTexts {
            columns: &["ID", "Name", "Email", "Phone", "Blocked", "Created"],
            empty: "No users found...",
        },
        items: ResourceTexts {
            columns: &["ID", "Title", "Price", "Owner", "Created"],
            empty: "No items found...",
        },
        blocks: ResourceTexts {
            columns: &["ID", "User", "Reason", "Created", "Expires"],
            empty: "No blocks found...",
        },
        notifications: ResourceTexts {
            columns: &["ID", "Title", "Body", "Read", "Created"],
            empty: "No notifications found...",
        },
    },

    // ========================================================================
    // 未登录
    // ========================================================================
    signed_out: SignedOutTexts {
        title: "Signed out",
        message: "You are not signed in.",
        hint: "Press Enter to sign in with an API token.",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        logout: LogoutModalTexts {
            title: "Are you sure",
            description: "Are you sure you want to log out?",
            confirm: "Log out",
        },
        sign_in: SignInModalTexts {
            title: "Sign in",
            token_label: "API token",
            token_hint: "Paste the bearer token issued by the API",
            submitting: "Signing in...",
            empty_token: "Token must not be empty",
        },
        error: ErrorModalTexts {
            title: "Error",
            close_hint: "Press Esc or Enter to close",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        signed_in: "Signed in",
        signed_out: "Signed out",
        logout_failed: "Log out failed",
        fetch_failed: "Fetch failed, showing last data",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        lists: "Lists",
        switch_panel: "Switch panel",
        move_cursor: "Move up/down",
        open: "Open / confirm",
        toggle_menu: "Toggle menu (narrow terminal)",
        next_previous_page: "Next / previous page",
        first_last_page: "First / last page",
        refresh: "Refresh",
        logout: "Log out",
        quit: "Quit",
        close_hint: "Press Esc to close the help",
    },
};
