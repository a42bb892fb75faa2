//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Nightglow Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "nightglow"
# width = 800            # 1-16384
# height = 600           # 1-16384
# vsync = true

[render]
# Offscreen targets are created once at this size and never resized.
# width = 800            # 1-8192
# height = 600           # 1-8192
# blur_passes = 10       # 1-64, one-dimensional passes (alternating H/V)
# bright_threshold = 1.0 # luminance cut-off for the bright-pass attachment

[post_process]
# hdr = false
# bloom = false
# exposure = 1.0         # 0.0-100.0
# exposure_step = 0.001  # per frame while the exposure key is held

[camera]
# position = [4.0, 5.0, 6.0]
# yaw = -90.0
# pitch = 0.0            # -89.0-89.0
# speed = 2.5
# sensitivity = 0.1
# zoom = 45.0            # 1.0-45.0
# near = 0.1
# far = 100.0

[scene]
# asset_root = "resources"
# shininess = 32.0

[scene.skybox]
# enabled = true
# faces = [               # +X, -X, +Y, -Y, +Z, -Z
#   "textures/nightsky/nightsky_ft.tga",
#   "textures/nightsky/nightsky_bk.tga",
#   "textures/nightsky/nightsky_up.tga",
#   "textures/nightsky/nightsky_dn.tga",
#   "textures/nightsky/nightsky_rt.tga",
#   "textures/nightsky/nightsky_lf.tga",
# ]

[scene.light_box]
# enabled = true
# color = [14.0, 2.0, 25.0]
# scale = 0.06

# Point lights (at most 2) and objects replace the built-in lists when given.
# [[scene.point_lights]]
# position = [1.2, 1.2, 1.2]
# ambient = [0.05, 0.05, 0.05]
# diffuse = [0.8, 0.8, 0.8]
# specular = [1.0, 1.0, 1.0]
# constant = 1.0
# linear = 0.09
# quadratic = 0.032
#
# [[scene.objects]]
# name = "crate"
# mesh = "cube"          # cube | sphere | plane | path/to/model.glb
# position = [0.0, 0.0, 0.0]
# scale = [1.0, 1.0, 1.0]
# color = [1.0, 1.0, 1.0]
# cull_back_faces = false
#
# [[scene.scatter]]
# name = "trees"
# mesh = "objects/tree/tree.glb"
# count = 100
# seed = 9
# x_range = [-199.0, 51.0]
# z_range = [-200.0, 0.0]
# y = -1.0
# scale = 0.8

[keybinds]
# move_forward = "W"
# move_backward = "S"
# move_left = "A"
# move_right = "D"
# toggle_hdr = "U"
# toggle_bloom = "N"
# exposure_up = "L"
# exposure_down = "J"
# toggle_overlay = "F1"
# quit = "K"

[persistence]
# settings_file = "resources/program_state.txt"
# save_on_exit = false

[logging]
# level = "info"         # trace | debug | info | warn | error
"##
}
