//! Title case dictionary for the English UI strings.
//!
//! Most entries are already correct and map to themselves. Values are the
//! final text and take precedence over the generic capitalization rule.

pub const TITLE_CASE: &[(&str, &str)] = &[
    ("Settings", "Settings"),
    ("Save", "Save"),
    ("Delete", "Delete"),
    ("Cancel", "Cancel"),
    ("Close", "Close"),
    ("Add", "Add"),
    ("Edit", "Edit"),
    ("Done", "Done"),
    ("Next", "Next"),
    ("Back", "Back"),
    ("Reset", "Reset"),
    ("Release", "Release"),
    ("Clear", "Clear"),
    ("Task", "Task"),
    ("Task Complete", "Task Complete"),
    ("Task Complete!", "Task Complete!"),
    ("Title", "Title"),
    ("Description", "Description"),
    ("Duration", "Duration"),
    ("Enter task title", "Enter task title"),
    ("Task Settings", "Task Settings"),
    ("Add Task", "Add Task"),
    ("Task added", "Task added"),
    ("Task deleted", "Task deleted"),
    ("At least one task is required", "At least one task is required"),
    ("Maximum 10 tasks allowed", "Maximum 10 tasks allowed"),
    ("tasks played", "tasks played"),
    ("Did you complete this task?", "Did you complete this task?"),
    ("Not Done", "Not Done"),
    ("Done!", "Done!"),
    ("Ideal Self", "Ideal Self"),
    ("Ideal Self Image", "Ideal Self Image"),
    ("Album Name", "Album Name"),
    ("Album Cover", "Album Cover"),
    ("Enter album name", "Enter album name"),
    ("Album Settings", "Album Settings"),
    ("Create Album", "Create Album"),
    ("Your Albums", "Your Albums"),
    ("Life Dream Album", "Life Dream Album"),
    ("Single Album", "Single Album"),
    ("Select Photo", "Select Photo"),
    ("Change Photo", "Change Photo"),
    ("Choose how to get photo", "Choose how to get photo"),
    ("Photo selected", "Photo selected"),
    ("Failed to select photo", "Failed to select photo"),
    ("Photo selection cancelled", "Photo selection cancelled"),
    ("Gallery", "Gallery"),
    ("Camera", "Camera"),
    ("No Image", "No Image"),
    ("Image deleted", "Image deleted"),
    ("Profile Settings", "Profile Settings"),
    ("Artist Name", "Artist Name"),
    ("Enter your name", "Enter your name"),
    ("Notifications", "Notifications"),
    ("Enable notifications", "Enable notifications"),
    ("Notification interval", "Notification interval"),
    (
        "Send periodic reminders to stay mindful of your actions",
        "Send periodic reminders to stay mindful of your actions",
    ),
    ("min", "min"),
    ("hours", "hours"),
    ("Day", "Day"),
    ("days", "days"),
    ("Settings saved", "Settings saved"),
    ("Failed to save", "Failed to save"),
    ("Are you sure you want to delete?", "Are you sure you want to delete?"),
    ("This action cannot be undone", "This action cannot be undone"),
    ("Form reset", "Form reset"),
    ("Version", "Version"),
    ("Help & Feedback", "Help & Feedback"),
    ("Privacy Policy", "Privacy Policy"),
    ("Terms of Service", "Terms of Service"),
    ("Coming soon", "Coming soon"),
    ("Danger Zone", "Danger Zone"),
    ("Delete This Album", "Delete This Album"),
    ("Delete Album", "Delete Album"),
    ("Top Tasks", "Top Tasks"),
    ("Top Tracks", "Top Tracks"),
    ("Top Albums", "Top Albums"),
    ("Total Tasks Completed", "Total Tasks Completed"),
    ("Your Concert", "Your Concert"),
    ("New", "New"),
    ("Venue", "Venue"),
    ("Fan Entry", "Fan Entry"),
    ("Complete tasks to allow entry", "Complete tasks to allow entry"),
    ("Entering", "Entering"),
    ("Playback", "Playback"),
    ("Week", "Week"),
    ("Month", "Month"),
    ("Year", "Year"),
    (" data not available", " data not available"),
    ("Daily Report", "Daily Report"),
    ("Weekly Report", "Weekly Report"),
    ("Monthly Report", "Monthly Report"),
    ("Annual Report", "Annual Report"),
    ("No data available", "No data available"),
    ("No tasks played on this day", "No tasks played on this day"),
    ("Daily Take", "Daily Take"),
    ("Weekly Hits", "Weekly Hits"),
    ("Monthly Hits", "Monthly Hits"),
    ("Annual Legacy", "Annual Legacy"),
    ("Total playtime", "Total playtime"),
    ("Top Albums of the Year", "Top Albums of the Year"),
    ("Top Tracks of the Year", "Top Tracks of the Year"),
    ("Top Tracks This Week", "Top Tracks This Week"),
    ("Top Tracks This Month", "Top Tracks This Month"),
    ("Top Albums This Month", "Top Albums This Month"),
    ("Your Monthly Rhythm", "Your Monthly Rhythm"),
    ("Daily average tasks per week", "Daily average tasks per week"),
    ("Consistency Record", "Consistency Record"),
    ("Streak", "Streak"),
    ("Peak Month", "Peak Month"),
    ("Sun", "Sun"),
    ("Mon", "Mon"),
    ("Tue", "Tue"),
    ("Wed", "Wed"),
    ("Thu", "Thu"),
    ("Fri", "Fri"),
    ("Sat", "Sat"),
    ("Good morning", "Good Morning"),
    ("Hello", "Hello"),
    ("Good evening", "Good Evening"),
    ("Task Streak", "Task Streak"),
    ("Failed to load data", "Failed to load data"),
    ("Failed to save record", "Failed to save record"),
    (" deleted", " deleted"),
    (", are you sure you want to delete?", ", are you sure you want to delete?"),
    ("All album data will be deleted", "All album data will be deleted"),
    ("Task history will also be deleted", "Task history will also be deleted"),
    ("Will be removed from home screen", "Will be removed from home screen"),
    ("Could not open", "Could not open"),
    ("Error occurred while opening URL", "Error occurred while opening URL"),
    ("Unknown", "Unknown"),
    ("times", "times"),
    ("avg", "avg"),
];
