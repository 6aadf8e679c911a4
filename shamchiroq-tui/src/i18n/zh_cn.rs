//! 简体中文翻译 (zh-CN)

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
        cancel: "取消",
        loading: "加载中...",
        page_not_found: "页面不存在",
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
            switch_panel: "切换面板",
            move_cursor: "移动",
            open: "打开",
            menu: "菜单",
            page: "翻页",
            refresh: "刷新",
            sign_in: "登录",
            logout: "登出",
            help: "帮助",
            quit: "退出",
            cancel: "取消",
            submit: "提交",
        },
    },

    // ========================================================================
    // 导航
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        reports: "举报",
        users: "用户",
        items: "物品",
        blocks: "封禁",
        notifications: "通知",
        logout: "登出",
    },

    // ========================================================================
    // 列表页
    // ========================================================================
    lists: ListTexts {
        page: "页",
        rows: "条",
        refreshing: "刷新中...",
        unavailable: "数据加载失败。",
        unavailable_hint: "按 Alt+r 重试。",
        reports: ResourceTexts {
            columns: &["ID", "原因", "举报人", "对象", "状态", "创建时间"],
            empty: "暂无举报...",
        },
        users: ResourceTexts {
            columns: &["ID", "名称", "邮箱", "电话", "已封禁", "创建时间"],
            empty: "暂无用户...",
        },
        items: ResourceTexts {
            columns: &["ID", "标题", "价格", "所有者", "创建时间"],
            empty: "暂无物品...",
        },
        blocks: ResourceTexts {
            columns: &["ID", "用户", "原因", "创建时间", "到期时间"],
            empty: "暂无封禁记录...",
        },
        notifications: ResourceTexts {
            columns: &["ID", "标题", "内容", "已读", "创建时间"],
            empty: "暂无通知...",
        },
    },

    // ========================================================================
    // 未登录
    // ========================================================================
    signed_out: SignedOutTexts {
        title: "未登录",
        message: "当前没有登录。",
        hint: "按 Enter 使用 API token 登录。",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        logout: LogoutModalTexts {
            title: "确定吗",
            description: "确定要登出吗？",
            confirm: "登出",
        },
        sign_in: SignInModalTexts {
            title: "登录",
            token_label: "API token",
            token_hint: "粘贴 API 签发的 bearer token",
            submitting: "登录中...",
            empty_token: "token 不能为空",
        },
        error: ErrorModalTexts {
            title: "错误",
            close_hint: "按 Esc 或 Enter 关闭",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        signed_in: "已登录",
        signed_out: "已登出",
        logout_failed: "登出失败",
        fetch_failed: "请求失败，显示的是上次的数据",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global: "全局快捷键",
        lists: "列表",
        switch_panel: "切换面板",
        move_cursor: "上下移动",
        open: "打开 / 确认",
        toggle_menu: "展开/收起菜单（窄终端）",
        next_previous_page: "下一页 / 上一页",
        first_last_page: "第一页 / 最后一页",
        refresh: "刷新",
        logout: "登出",
        quit: "退出",
        close_hint: "按 Esc 关闭帮助",
    },
};
