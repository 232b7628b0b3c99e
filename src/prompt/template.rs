// Few-shot prompt text
// Author: kelexine (https://github.com/kelexine)

/// Opening instruction; `{app}` is replaced with the app or site name.
pub const PREAMBLE: &str = "Analyze each image carefully and generate detailed testing instructions for the features of the app: {app}. For each image, please follow the example below and describe the visual elements, extract key features, and provide testing instructions as follows:  ";

/// Worked example for a login screen.
pub const LOGIN_EXAMPLE: &str = concat!(
    "### Example 1: Login Page Feature ",
    "Image URL: https://assets.justinmind.com/wp-content/uploads/2020/01/mangools-login-form.png ",
    "1. *Description*: This is the login page where users enter their credentials. ",
    "2. *Pre-conditions*: The user must have an account or create one. ",
    "3. *Testing Steps*: ",
    "   - Step 1: Open the login page. ",
    "   - Step 2: Enter a valid email and password. ",
    "   - Step 3: Click the login button. ",
    "4. *Expected Result*: The user is logged in and redirected to the dashboard.  ",
);

/// Worked example for a settings screen.
pub const SETTINGS_EXAMPLE: &str = concat!(
    "### Example 2: Settings Page Feature ",
    "Image URL: https://i.pinimg.com/736x/ac/b2/34/acb2344dc9d0266b0226d7c53cbeb963.jpg ",
    "1. *Description*: This is the settings page where users can adjust account settings. ",
    "2. *Pre-conditions*: The user must be logged into their account. ",
    "3. *Testing Steps*: ",
    "   - Step 1: Navigate to the settings page. ",
    "   - Step 2: Change the notification settings. ",
    "   - Step 3: Save the changes. ",
    "4. *Expected Result*: The settings are saved and reflected in the account. ",
);

/// Unfilled questions repeated under every "Feature N" heading.
pub const FEATURE_QUESTIONS: &str = concat!(
    "1. *Description*: Describe the main purpose of this feature based on the image. ",
    "2. *Pre-conditions*: What conditions must be met before testing this feature? ",
    "3. *Testing Steps*: Provide step-by-step instructions to test this feature. ",
    "4. *Expected Result*: Describe the expected outcome after testing.  ",
);
