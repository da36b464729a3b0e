//! Japanese to English translation tables.
//!
//! Both tables are plain pair lists so repeated keys stay visible to
//! [super::MappingTable], which reports them instead of letting one win.

/// Current table: notification messages and dialog strings.
pub const PRIMARY: &[(&str, &str)] = &[
    // habit messages
    ("今、何をしていますか？", "What are you doing right now?"),
    (
        "この5分間で何を達成しましたか？",
        "What did you accomplish in the last 5 minutes?",
    ),
    (
        "スマホを見る時間、タスクに使いませんか？",
        "Use phone time for tasks instead?",
    ),
    ("今の行動は、本当に必要ですか？", "Is this action really necessary?"),
    (
        "今この瞬間、何に集中していますか？",
        "What are you focusing on right now?",
    ),
    (
        "理想の自分に近づいていますか？",
        "Are you moving toward your ideal self?",
    ),
    ("今日のタスク、進んでいますか？", "Making progress on today's tasks?"),
    ("アルバムの次のトラックを再生しましょう", "Let's play the next track"),
    ("夢に近づく行動を始めませんか？", "Start actions toward your dreams?"),
    ("この15分を、どう使いますか？", "How will you use these 15 minutes?"),
    ("限られた時間、大切に使いましょう", "Use your limited time wisely"),
    (
        "今の時間の使い方、満足ですか？",
        "Satisfied with how you're using time?",
    ),
    (
        "時間は戻らない。今を活かしましょう",
        "Time won't come back. Make the most of now",
    ),
    ("SNSをやめて、タスクを始めませんか？", "Stop social media, start tasks?"),
    ("だらだらタイム、終了しませんか？", "End the idle time?"),
    ("スクロールより、成長を選びませんか？", "Choose growth over scrolling?"),
    ("習慣を変える瞬間は、今です", "Now is the moment to change habits"),
    ("小さな一歩が、大きな変化を生みます", "Small steps create big changes"),
    ("行動した分だけ、未来が変わります", "Your future changes with each action"),
    ("あなたならできる。始めてみましょう", "You can do it. Let's start"),
    // sleep messages
    (
        "Time to put your phone away and rest ",
        "Time to put your phone away and rest 🌙",
    ),
    (
        "Good morning! Ready to conquer today? ",
        "Good morning! Ready to conquer today? ☀️",
    ),
    // completion dialog
    ("このタスクはできましたか？", "Did you complete this task?"),
    ("できなかった", "Not Done"),
    ("できた！", "Done!"),
    ("タスク完了！", "Task Complete!"),
    ("アルバム完了！", "Album Complete!"),
    // greetings
    ("おはようございます", "Good morning"),
    ("こんにちは", "Hello"),
    ("こんばんは", "Good evening"),
    // weekdays
    ("日", "Sun"),
    ("月", "Mon"),
    ("火", "Tue"),
    ("水", "Wed"),
    ("木", "Thu"),
    ("金", "Fri"),
    ("土", "Sat"),
    // errors
    ("データの読み込みに失敗しました", "Failed to load data"),
    ("記録の保存に失敗しました", "Failed to save record"),
    ("URLを開けませんでした", "Could not open"),
];

/// Older table used for the settings, album and calendar screens.
pub const LEGACY: &[(&str, &str)] = &[
    // buttons
    ("設定", "Settings"),
    ("保存", "Save"),
    ("削除", "Delete"),
    ("キャンセル", "Cancel"),
    ("閉じる", "Close"),
    ("追加", "Add"),
    ("編集", "Edit"),
    ("完了", "Done"),
    ("次へ", "Next"),
    ("戻る", "Back"),
    ("リセット", "Reset"),
    ("解除", "Release"),
    ("クリア", "Clear"),
    // tasks
    ("タスク", "Task"),
    ("タイトル", "Title"),
    ("説明", "Description"),
    ("時間", "Duration"),
    ("タスク名を入力", "Enter task title"),
    ("タスク設定", "Task Settings"),
    ("タスクを追加", "Add Task"),
    ("タスクを追加しました", "Task added"),
    ("タスクを削除しました", "Task deleted"),
    ("タスクは最低1つ必要です", "At least one task is required"),
    ("タスクは最大10個までです", "Maximum 10 tasks allowed"),
    ("このタスクはできましたか？", "Did you complete this task?"),
    // albums
    ("理想の自分", "Ideal Self"),
    ("理想の自分の画像", "Ideal Self Image"),
    ("アルバム名", "Album Name"),
    ("アルバムカバー", "Album Cover"),
    ("アルバム名を入力", "Enter album name"),
    ("アルバム設定", "Album Settings"),
    ("アルバムを作成", "Create Album"),
    ("あなたのアルバム", "Your Albums"),
    ("このアルバムを削除", "Delete This Album"),
    ("アルバムを削除", "Delete Album"),
    // photos
    ("写真を選択", "Select Photo"),
    ("写真を変更", "Change Photo"),
    ("ギャラリー", "Gallery"),
    ("カメラ", "Camera"),
    ("画像なし", "No Image"),
    // settings
    ("プロフィール設定", "Profile Settings"),
    ("アーティスト名", "Artist Name"),
    ("通知", "Notifications"),
    ("通知を有効にする", "Enable notifications"),
    ("通知間隔", "Notification interval"),
    ("設定を保存しました", "Settings saved"),
    ("保存に失敗しました", "Failed to save"),
    ("本当に削除しますか？", "Are you sure you want to delete?"),
    ("この操作は取り消せません", "This action cannot be undone"),
    ("バージョン", "Version"),
    ("ヘルプ・フィードバック", "Help & Feedback"),
    ("プライバシーポリシー", "Privacy Policy"),
    ("利用規約", "Terms of Service"),
    ("近日公開", "Coming soon"),
    // calendar units
    ("分", "min"),
    ("時間後", "hours"),
    ("日", "Day"),
    ("週", "Week"),
    ("月", "Month"),
    ("年", "Year"),
    // calendar header
    ("日", "Sun"),
    ("月", "Mon"),
    ("火", "Tue"),
    ("水", "Wed"),
    ("木", "Thu"),
    ("金", "Fri"),
    ("土", "Sat"),
    // reports
    ("デイリーレポート", "Daily Report"),
    ("ウィークリーレポート", "Weekly Report"),
    ("マンスリーレポート", "Monthly Report"),
    ("年間レポート", "Annual Report"),
    ("データがありません", "No data available"),
    ("この日に再生されたタスクはありません", "No tasks played on this day"),
    ("連続記録", "Streak"),
    ("不明", "Unknown"),
    ("回", "times"),
];
